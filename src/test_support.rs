// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Helpers for tests that need a real git repository

use std::path::Path;

use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Create an empty repository with a committer identity configured
pub fn init_repo() -> (TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    (dir, repo)
}

/// Minimal episode page carrying the given video ID
pub fn episode_page(video_id: &str, number: u32) -> String {
    format!(
        "---\ntitle: \"Episode {number}\"\nyoutubeId: \"{video_id}\"\nepisodeNumber: {number}\n---\nContent here\n"
    )
}

/// Write files into the working tree and commit them at the given time
pub fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str, time: i64) -> Oid {
    let workdir = repo.workdir().unwrap();
    let mut index = repo.index().unwrap();

    for (rel, content) in files {
        let path = workdir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        index.add_path(Path::new(rel)).unwrap();
    }
    index.write().unwrap();

    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = Signature::new("Test User", "test@example.com", &Time::new(time, 0)).unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .unwrap()
}

/// Remove a file from the working tree and commit the deletion
pub fn commit_removal(repo: &Repository, rel: &str, message: &str, time: i64) -> Oid {
    let workdir = repo.workdir().unwrap();
    std::fs::remove_file(workdir.join(rel)).unwrap();

    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(rel)).unwrap();
    index.write().unwrap();

    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = Signature::new("Test User", "test@example.com", &Time::new(time, 0)).unwrap();
    let parent = repo.head().unwrap().peel_to_commit().unwrap();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &[&parent],
    )
    .unwrap()
}

/// Number of commits reachable from HEAD
pub fn commit_count(repo: &Repository) -> usize {
    let mut revwalk = repo.revwalk().unwrap();
    if revwalk.push_head().is_err() {
        return 0;
    }
    revwalk.count()
}

/// A public video published at the given RFC 3339 timestamp
pub fn sample_video(video_id: &str, published_at: &str) -> crate::youtube::Video {
    crate::youtube::Video {
        video_id: video_id.to_string(),
        channel_id: "UCtest".to_string(),
        title: format!("Video {video_id}"),
        description: String::new(),
        published_at: chrono::DateTime::parse_from_rfc3339(published_at)
            .unwrap()
            .to_utc(),
        duration: "PT10M".to_string(),
        thumbnail_url: String::new(),
        tags: vec![],
        episode_number: None,
        privacy_status: Some(crate::youtube::PrivacyStatus::Public),
    }
}
