// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use git2::{Commit, ErrorCode, IndexAddOption, Repository};

use crate::error::CommitError;
use crate::state::directory_prefix;
use crate::sync::SyncedEpisode;

/// Build the commit message summarizing a batch of synced episodes
pub fn commit_message(episodes: &[SyncedEpisode]) -> String {
    let numbers: Vec<String> = episodes
        .iter()
        .map(|episode| episode.episode_number.to_string())
        .collect();

    let mut message = format!(
        "Sync {} episode(s): {}\n\n",
        episodes.len(),
        numbers.join(", ")
    );
    for episode in episodes {
        message.push_str(&format!(
            "- Episode {}: {} (YouTube: {})\n",
            episode.episode_number, episode.title, episode.video_id
        ));
    }
    message.push_str("\nGenerated by ytsync");
    message
}

/// Stage every Markdown file in the episode directory and commit them.
///
/// `output_directory` is relative to the repository root. Returns the new
/// commit's hash.
pub fn commit_episodes(
    repo_path: &Path,
    output_directory: &str,
    episodes: &[SyncedEpisode],
) -> Result<String, CommitError> {
    if episodes.is_empty() {
        return Err(CommitError::NothingToCommit);
    }

    let repo = Repository::discover(repo_path)?;

    let pathspec = format!("{}*.md", directory_prefix(output_directory));
    let mut index = repo.index()?;
    index.add_all([pathspec.as_str()], IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let parent = head_commit(&repo)?;
    if let Some(parent) = &parent
        && parent.tree_id() == tree.id()
    {
        return Err(CommitError::NothingToCommit);
    }

    let signature = repo.signature()?;
    let parents: Vec<&Commit> = parent.iter().collect();
    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        &commit_message(episodes),
        &tree,
        &parents,
    )?;

    Ok(oid.to_string())
}

/// The commit HEAD points to, or `None` on an unborn branch
fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>, git2::Error> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
