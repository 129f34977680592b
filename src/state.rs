// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{Delta, DiffOptions, Oid, Repository, Sort};

use crate::error::FrontmatterError;
use crate::metadata::{RecordHeader, parse_frontmatter};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::youtube::Video;

/// An episode file first added to the repository by a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRecord {
    pub video_id: String,
    /// Path relative to the repository root
    pub episode_path: String,
    /// Commit time
    pub synced_at: DateTime<Utc>,
    pub commit_hash: String,
}

/// What previous runs have synced, derived from git history
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    pub synced_video_ids: HashSet<String>,
    pub last_sync_timestamp: Option<DateTime<Utc>>,
    pub episode_count: usize,
    /// Oldest first
    pub sync_history: Vec<SyncRecord>,
}

impl SyncState {
    fn from_history(mut sync_history: Vec<SyncRecord>) -> Self {
        sync_history.sort_by_key(|record| record.synced_at);

        let synced_video_ids: HashSet<String> = sync_history
            .iter()
            .map(|record| record.video_id.clone())
            .collect();

        Self {
            episode_count: synced_video_ids.len(),
            last_sync_timestamp: sync_history.last().map(|record| record.synced_at),
            synced_video_ids,
            sync_history,
        }
    }
}

/// Plan for a sync run, partitioning the fetched videos
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Videos that need an episode page
    pub to_sync: Vec<Video>,
    /// Videos whose page already exists in history
    pub already_synced: Vec<Video>,
    /// Videos on the exclusion list
    pub excluded: Vec<Video>,
    /// Videos published after the upper date bound
    pub too_recent: Vec<Video>,
}

/// Reconstruct the sync state from the repository history.
///
/// Every commit reachable from HEAD is diffed against its first parent.
/// Markdown files added under `episode_directory` whose front matter
/// carries a `youtubeId` count as synced. This never fails: a missing or
/// unreadable repository yields an empty state.
pub fn build_sync_state(
    repo_path: &Path,
    episode_directory: &str,
    reporter: &SharedProgressReporter,
) -> SyncState {
    let directory = normalize_directory(episode_directory);
    reporter.report(ProgressEvent::ScanningHistory {
        episode_directory: directory.clone(),
    });

    let state = match Repository::discover(repo_path)
        .and_then(|repo| scan_history(&repo, &directory, reporter))
    {
        Ok(records) => SyncState::from_history(records),
        Err(e) => {
            reporter.report(ProgressEvent::HistoryUnavailable {
                error: e.message().to_string(),
            });
            SyncState::default()
        }
    };

    reporter.report(ProgressEvent::HistoryScanned {
        episode_count: state.episode_count,
        last_sync: state.last_sync_timestamp,
    });

    state
}

pub fn is_video_synced(video_id: &str, state: &SyncState) -> bool {
    state.synced_video_ids.contains(video_id)
}

pub fn last_sync_timestamp(state: &SyncState) -> Option<DateTime<Utc>> {
    state.sync_history.last().map(|record| record.synced_at)
}

/// Partition fetched videos against the sync state.
///
/// Checks apply in order: already synced, excluded, published after
/// `before`. Input order is preserved within each bucket.
pub fn create_sync_plan(
    videos: Vec<Video>,
    state: &SyncState,
    excluded_video_ids: &[String],
    before: Option<DateTime<Utc>>,
) -> SyncPlan {
    let mut plan = SyncPlan::default();

    for video in videos {
        if is_video_synced(&video.video_id, state) {
            plan.already_synced.push(video);
        } else if excluded_video_ids.contains(&video.video_id) {
            plan.excluded.push(video);
        } else if before.is_some_and(|before| video.published_at > before) {
            plan.too_recent.push(video);
        } else {
            plan.to_sync.push(video);
        }
    }

    plan
}

/// Repository-relative directory with forward slashes and no trailing `/`.
/// The repository root (`.`, `./`) normalizes to the empty string.
pub(crate) fn normalize_directory(directory: &str) -> String {
    let directory = directory.trim().replace('\\', "/");
    let mut directory = directory.as_str();
    while let Some(rest) = directory.strip_prefix("./") {
        directory = rest;
    }
    match directory.trim_end_matches('/') {
        "." => String::new(),
        directory => directory.to_string(),
    }
}

/// Prefix every path under the directory starts with; empty for the root
pub(crate) fn directory_prefix(directory: &str) -> String {
    match normalize_directory(directory) {
        root if root.is_empty() => root,
        directory => format!("{directory}/"),
    }
}

fn scan_history(
    repo: &Repository,
    directory: &str,
    reporter: &SharedProgressReporter,
) -> Result<Vec<SyncRecord>, git2::Error> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME | Sort::REVERSE)?;

    let prefix = directory_prefix(directory);
    let mut records = Vec::new();

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let Some(synced_at) = DateTime::from_timestamp(commit.time().seconds(), 0) else {
            continue;
        };

        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut options = DiffOptions::new();
        if !directory.is_empty() {
            options.pathspec(directory);
        }
        let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut options))?;

        for delta in diff.deltas() {
            if delta.status() != Delta::Added {
                continue;
            }
            let file = delta.new_file();
            let Some(path) = file.path().and_then(|p| p.to_str()) else {
                continue;
            };
            if !path.starts_with(&prefix) || !path.ends_with(".md") {
                continue;
            }

            match read_header(repo, file.id()) {
                Ok(RecordHeader {
                    youtube_id: Some(video_id),
                    ..
                }) => records.push(SyncRecord {
                    video_id,
                    episode_path: path.to_string(),
                    synced_at,
                    commit_hash: commit.id().to_string(),
                }),
                Ok(_) => {}
                Err(e) => reporter.report(ProgressEvent::HistoryRecordSkipped {
                    path: path.to_string(),
                    commit: commit.id().to_string(),
                    error: e.to_string(),
                }),
            }
        }
    }

    Ok(records)
}

fn read_header(repo: &Repository, blob_id: Oid) -> Result<RecordHeader, HeaderError> {
    let blob = repo.find_blob(blob_id)?;
    let content = std::str::from_utf8(blob.content()).map_err(FrontmatterError::from)?;
    Ok(parse_frontmatter(content)?)
}

#[derive(Debug, thiserror::Error)]
enum HeaderError {
    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
}
