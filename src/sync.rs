// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::commit::commit_episodes;
use crate::config::SyncConfig;
use crate::episode::{GeneratedEpisode, GuestParser, generate_episode};
use crate::error::SyncError;
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::state::{build_sync_state, create_sync_plan};
use crate::youtube::{FetchOptions, Video, VideoApi, fetch_channel_videos};

/// Options for a single sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Ignore the last sync time and fetch the whole catalog
    pub full_sync: bool,
    /// Generate episodes without writing or committing anything
    pub dry_run: bool,
    /// Write files but leave them uncommitted
    pub no_commit: bool,
    /// Maximum number of episodes to sync (None = all)
    pub limit: Option<usize>,
    /// Only fetch videos published after this time
    pub after: Option<DateTime<Utc>>,
    /// Skip videos published after this time
    pub before: Option<DateTime<Utc>>,
}

/// An episode generated (and, outside dry-run mode, written) in this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedEpisode {
    pub episode_number: u32,
    pub video_id: String,
    pub title: String,
    /// Path relative to the repository root
    pub path: PathBuf,
}

/// A video that could not be turned into an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEpisode {
    pub episode_number: u32,
    pub video_id: String,
    pub title: String,
    pub error: String,
}

/// Result of a sync operation
#[derive(Debug, Clone, Default)]
pub struct SyncResult {
    pub synced: Vec<SyncedEpisode>,
    pub failed: Vec<FailedEpisode>,
    /// Videos already present in history
    pub skipped: usize,
    /// Videos on the exclusion list
    pub excluded: usize,
    /// Videos left out by the upper date bound or the episode limit
    pub limited: usize,
    /// Hash of the sync commit, if one was created
    pub commit_id: Option<String>,
    /// Why the commit step failed; the episode files stay on disk
    pub commit_warning: Option<String>,
    pub dry_run: bool,
}

impl SyncResult {
    /// True when there was work to do and none of it succeeded
    pub fn all_failed(&self) -> bool {
        self.synced.is_empty() && !self.failed.is_empty()
    }
}

/// Synchronize a YouTube channel into episode pages of a git repository
///
/// This is the main entry point for the library. It:
/// 1. Validates the configuration
/// 2. Reconstructs what was synced before from git history
/// 3. Fetches the channel's videos
/// 4. Filters out synced, excluded and too recent videos
/// 5. Numbers the rest in publish order, continuing the existing sequence
/// 6. Generates and writes one Markdown page per video
/// 7. Commits the new pages
///
/// Per-episode failures are collected in the result and do not stop the
/// batch. A failed commit is reported as a warning.
pub async fn sync_channel<A: VideoApi + ?Sized>(
    api: &A,
    repo_path: &Path,
    config: &SyncConfig,
    options: &SyncOptions,
    reporter: SharedProgressReporter,
) -> Result<SyncResult, SyncError> {
    config.validate()?;
    let guest_parser = config.guest_parser()?;

    let state = build_sync_state(repo_path, &config.output_directory, &reporter);

    let full_sync = options.full_sync || config.full_sync;
    let published_after = match options.after {
        Some(after) => Some(after),
        None if full_sync => None,
        None => state.last_sync_timestamp,
    };

    let fetch_options = FetchOptions {
        channel_id: config.channel_id.clone(),
        published_after,
        published_before: options.before,
        max_videos: config.max_videos,
    };
    let videos =
        fetch_channel_videos(api, &fetch_options, &config.retry_policy(), &reporter).await?;
    let fetched = videos.len();

    let plan = create_sync_plan(videos, &state, &config.excluded_video_ids, options.before);
    for video in &plan.excluded {
        reporter.report(ProgressEvent::VideoExcluded {
            video_id: video.video_id.clone(),
        });
    }

    let mut to_sync = plan.to_sync;
    to_sync.sort_by_key(|video| video.published_at);

    let mut limited = plan.too_recent.len();
    if let Some(limit) = options.limit
        && to_sync.len() > limit
    {
        limited += to_sync.len() - limit;
        to_sync.truncate(limit);
    }

    reporter.report(ProgressEvent::SyncPlanReady {
        fetched,
        already_synced: plan.already_synced.len(),
        to_sync: to_sync.len(),
    });

    if !options.dry_run && !to_sync.is_empty() {
        let output_dir = repo_path.join(&config.output_directory);
        std::fs::create_dir_all(&output_dir).map_err(|e| SyncError::CreateOutputDir {
            path: output_dir.clone(),
            source: e,
        })?;
    }

    let mut synced = Vec::new();
    let mut failed = Vec::new();
    let first_number = state.episode_count as u32 + 1;

    for (video, episode_number) in to_sync.iter_mut().zip(first_number..) {
        video.episode_number = Some(episode_number);
    }

    for video in to_sync {
        let Some(episode_number) = video.episode_number else {
            continue;
        };

        match build_episode(
            &video,
            episode_number,
            config,
            &guest_parser,
            repo_path,
            options.dry_run,
        ) {
            Ok(episode) => {
                reporter.report(ProgressEvent::EpisodeGenerated {
                    episode_number,
                    title: video.title.clone(),
                    path: episode.path.clone(),
                });
                synced.push(SyncedEpisode {
                    episode_number,
                    video_id: video.video_id,
                    title: video.title,
                    path: episode.path,
                });
            }
            Err(error) => {
                reporter.report(ProgressEvent::EpisodeFailed {
                    episode_number,
                    video_id: video.video_id.clone(),
                    error: error.clone(),
                });
                failed.push(FailedEpisode {
                    episode_number,
                    video_id: video.video_id,
                    title: video.title,
                    error,
                });
            }
        }
    }

    let mut commit_id = None;
    let mut commit_warning = None;
    if !options.dry_run && !options.no_commit && !synced.is_empty() {
        match commit_episodes(repo_path, &config.output_directory, &synced) {
            Ok(id) => {
                reporter.report(ProgressEvent::Committed {
                    commit_id: id.clone(),
                    episode_count: synced.len(),
                });
                commit_id = Some(id);
            }
            Err(e) => {
                reporter.report(ProgressEvent::CommitFailed {
                    error: e.to_string(),
                });
                commit_warning = Some(e.to_string());
            }
        }
    }

    reporter.report(ProgressEvent::SyncCompleted {
        synced_count: synced.len(),
        skipped_count: plan.already_synced.len(),
        failed_count: failed.len(),
        dry_run: options.dry_run,
    });

    Ok(SyncResult {
        synced,
        failed,
        skipped: plan.already_synced.len(),
        excluded: plan.excluded.len(),
        limited,
        commit_id,
        commit_warning,
        dry_run: options.dry_run,
    })
}

/// Generate one episode page and write it unless in dry-run mode
fn build_episode(
    video: &Video,
    episode_number: u32,
    config: &SyncConfig,
    guest_parser: &GuestParser,
    repo_path: &Path,
    dry_run: bool,
) -> Result<GeneratedEpisode, String> {
    let episode = generate_episode(video, episode_number, config, guest_parser)
        .map_err(|e| e.to_string())?;

    if !dry_run {
        std::fs::write(repo_path.join(&episode.path), &episode.content)
            .map_err(|e| format!("Failed to write {}: {e}", episode.path.display()))?;
    }

    Ok(episode)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{HashMap, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::error::{ApiError, ConfigError};
    use crate::metadata::{EpisodeFrontmatter, parse_frontmatter};
    use crate::progress::{NoopReporter, RecordingReporter};
    use crate::test_support::{commit_count, commit_files, episode_page, init_repo};
    use crate::youtube::{
        ChannelListResponse, SearchListResponse, SearchParams, VideoListResponse,
    };

    // 2024-01-01T00:00:00Z
    const SEEDED_AT: i64 = 1_704_067_200;

    /// Scripted API: search pages are served in order, details come from
    /// a fixed catalog of (published, duration) pairs
    struct MockApi {
        pages: Mutex<VecDeque<Result<SearchListResponse, ApiError>>>,
        catalog: HashMap<String, (&'static str, &'static str)>,
        search_calls: AtomicUsize,
        published_after: Mutex<Vec<Option<DateTime<Utc>>>>,
    }

    impl MockApi {
        fn new(
            pages: Vec<Result<SearchListResponse, ApiError>>,
            catalog: &[(&str, &'static str, &'static str)],
        ) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                catalog: catalog
                    .iter()
                    .map(|(id, published, duration)| (id.to_string(), (*published, *duration)))
                    .collect(),
                search_calls: AtomicUsize::new(0),
                published_after: Mutex::new(Vec::new()),
            }
        }

        /// A single page listing the whole catalog in the given order
        fn single_page(catalog: &[(&str, &'static str, &'static str)]) -> Self {
            let ids: Vec<&str> = catalog.iter().map(|(id, _, _)| *id).collect();
            Self::new(vec![Ok(page(&ids))], catalog)
        }
    }

    fn page(ids: &[&str]) -> SearchListResponse {
        let items: Vec<_> = ids.iter().map(|id| json!({"id": {"videoId": id}})).collect();
        serde_json::from_value(json!({ "items": items })).unwrap()
    }

    #[async_trait]
    impl VideoApi for MockApi {
        async fn search(
            &self,
            _channel_id: &str,
            params: &SearchParams,
        ) -> Result<SearchListResponse, ApiError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.published_after
                .lock()
                .unwrap()
                .push(params.published_after);
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(SearchListResponse::default()))
        }

        async fn video_details(&self, video_ids: &[String]) -> Result<VideoListResponse, ApiError> {
            let items: Vec<_> = video_ids
                .iter()
                .filter_map(|id| self.catalog.get(id).map(|entry| (id, entry)))
                .map(|(id, (published, duration))| {
                    json!({
                        "id": id,
                        "snippet": {
                            "title": format!("Episode about {id}"),
                            "description": format!("All about {id}\nGuest: Alice Johnson"),
                            "publishedAt": published,
                        },
                        "contentDetails": {"duration": duration},
                        "status": {"privacyStatus": "public"}
                    })
                })
                .collect();
            Ok(serde_json::from_value(json!({ "items": items })).unwrap())
        }

        async fn verify_channel(&self, channel_id: &str) -> Result<ChannelListResponse, ApiError> {
            Err(ApiError::ChannelNotFound(channel_id.to_string()))
        }
    }

    fn config() -> SyncConfig {
        SyncConfig {
            youtube_api_key: "test-key".to_string(),
            channel_id: "UC123".to_string(),
            // test IDs are shorter than real video IDs
            include_video_embed: false,
            retry_backoff_ms: vec![0, 0, 0],
            ..Default::default()
        }
    }

    fn seed_two_episodes(repo: &git2::Repository) {
        commit_files(
            repo,
            &[
                ("content/episodes/001-first.md", &episode_page("old1", 1)),
                ("content/episodes/002-second.md", &episode_page("old2", 2)),
            ],
            "Seed episodes",
            SEEDED_AT,
        );
    }

    fn read_frontmatter(root: &Path, episode: &SyncedEpisode) -> EpisodeFrontmatter {
        let content = std::fs::read_to_string(root.join(&episode.path)).unwrap();
        parse_frontmatter(&content).unwrap()
    }

    const CATALOG: [(&str, &str, &str); 3] = [
        ("vidC", "2024-03-01T00:00:00Z", "PT30M"),
        ("vidA", "2024-01-15T00:00:00Z", "PT1H2M3S"),
        ("vidB", "2024-02-01T00:00:00Z", "PT45M"),
    ];

    #[tokio::test]
    async fn numbers_continue_history_in_publish_order() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&CATALOG);

        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        let numbered: Vec<(u32, &str)> = result
            .synced
            .iter()
            .map(|e| (e.episode_number, e.video_id.as_str()))
            .collect();
        assert_eq!(numbered, vec![(3, "vidA"), (4, "vidB"), (5, "vidC")]);

        assert_eq!(
            result.synced[0].path,
            PathBuf::from("content/episodes/003-episode-about-vida.md")
        );
        let frontmatter = read_frontmatter(dir.path(), &result.synced[0]);
        assert_eq!(frontmatter.episode_number, 3);
        assert_eq!(frontmatter.youtube_id, "vidA");
        assert_eq!(frontmatter.duration, "1:02:03");
        assert!(frontmatter.draft);
    }

    #[tokio::test]
    async fn creates_one_commit_for_the_batch() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&CATALOG);

        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert_eq!(commit_count(&repo), 2);
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(result.commit_id, Some(head.id().to_string()));
        assert!(result.commit_warning.is_none());

        let message = head.message().unwrap();
        assert!(message.starts_with("Sync 3 episode(s): 3, 4, 5\n"));
        assert!(message.contains("- Episode 4: Episode about vidB (YouTube: vidB)"));
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);

        let first = MockApi::single_page(&CATALOG);
        sync_channel(
            &first,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();
        let head_after_first = repo.head().unwrap().target();

        let second = MockApi::single_page(&CATALOG);
        let result = sync_channel(
            &second,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert!(result.synced.is_empty());
        assert_eq!(result.skipped, 3);
        assert!(result.commit_id.is_none());
        assert_eq!(repo.head().unwrap().target(), head_after_first);
        let files = std::fs::read_dir(dir.path().join("content/episodes"))
            .unwrap()
            .count();
        assert_eq!(files, 5);
    }

    #[tokio::test]
    async fn repository_root_output_is_reconciled_on_the_next_run() {
        let (dir, repo) = init_repo();
        let config = SyncConfig {
            output_directory: "./".to_string(),
            ..config()
        };

        let first = sync_channel(
            &MockApi::single_page(&CATALOG),
            dir.path(),
            &config,
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();
        assert_eq!(first.synced.len(), 3);
        assert!(first.commit_id.is_some());

        let second = sync_channel(
            &MockApi::single_page(&CATALOG),
            dir.path(),
            &config,
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert!(second.synced.is_empty());
        assert_eq!(second.skipped, 3);
        assert_eq!(commit_count(&repo), 1);
    }

    #[tokio::test]
    async fn incremental_fetch_starts_at_last_sync() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&[]);

        sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        let expected = DateTime::from_timestamp(SEEDED_AT, 0);
        assert_eq!(*api.published_after.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn full_sync_fetches_everything() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&[]);
        let options = SyncOptions {
            full_sync: true,
            ..Default::default()
        };

        sync_channel(&api, dir.path(), &config(), &options, NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(*api.published_after.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn excluded_videos_are_never_generated() {
        let (dir, _repo) = init_repo();
        let api = MockApi::single_page(&CATALOG);
        let config = SyncConfig {
            excluded_video_ids: vec!["vidB".to_string()],
            ..config()
        };

        let recorder = Arc::new(RecordingReporter::default());
        let result = sync_channel(
            &api,
            dir.path(),
            &config,
            &SyncOptions::default(),
            recorder.clone(),
        )
        .await
        .unwrap();

        let ids: Vec<&str> = result.synced.iter().map(|e| e.video_id.as_str()).collect();
        assert_eq!(ids, vec!["vidA", "vidC"]);
        assert_eq!(result.synced[1].episode_number, 2);
        assert_eq!(result.excluded, 1);
        assert!(recorder.events().iter().any(|event| matches!(
            event,
            ProgressEvent::VideoExcluded { video_id } if video_id == "vidB"
        )));
    }

    #[tokio::test]
    async fn quota_error_is_retried_once() {
        let (dir, _repo) = init_repo();
        let api = MockApi::new(
            vec![Err(ApiError::QuotaExceeded), Ok(page(&["vidA"]))],
            &CATALOG,
        );

        let recorder = Arc::new(RecordingReporter::default());
        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            recorder.clone(),
        )
        .await
        .unwrap();

        assert_eq!(result.synced.len(), 1);
        assert_eq!(api.search_calls.load(Ordering::SeqCst), 2);
        let retries = recorder
            .events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::RetryScheduled { .. }))
            .count();
        assert_eq!(retries, 1);
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_call() {
        let (dir, _repo) = init_repo();
        let api = MockApi::single_page(&CATALOG);
        let config = SyncConfig {
            youtube_api_key: String::new(),
            ..config()
        };

        let result = sync_channel(
            &api,
            dir.path(),
            &config,
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await;

        assert!(matches!(
            result,
            Err(SyncError::Config(ConfigError::MissingApiKey))
        ));
        assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_credential_aborts_without_writing() {
        let (dir, repo) = init_repo();
        let api = MockApi::new(vec![Err(ApiError::InvalidCredential)], &CATALOG);

        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await;

        assert!(matches!(
            result,
            Err(SyncError::Api(ApiError::InvalidCredential))
        ));
        assert_eq!(api.search_calls.load(Ordering::SeqCst), 1);
        assert!(!dir.path().join("content/episodes").exists());
        assert_eq!(commit_count(&repo), 0);
    }

    #[tokio::test]
    async fn bad_duration_fails_only_that_episode() {
        let (dir, repo) = init_repo();
        let api = MockApi::single_page(&[
            ("good1", "2024-01-01T00:00:00Z", "PT10M"),
            ("broken", "2024-01-02T00:00:00Z", "ten minutes"),
            ("good2", "2024-01-03T00:00:00Z", "PT20M"),
        ]);

        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        let ids: Vec<&str> = result.synced.iter().map(|e| e.video_id.as_str()).collect();
        assert_eq!(ids, vec!["good1", "good2"]);
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].video_id, "broken");
        assert_eq!(result.failed[0].episode_number, 2);
        assert!(result.failed[0].error.contains("ten minutes"));
        assert!(!result.all_failed());

        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert!(head.message().unwrap().starts_with("Sync 2 episode(s): 1, 3\n"));
    }

    #[tokio::test]
    async fn dry_run_writes_and_commits_nothing() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&CATALOG);
        let options = SyncOptions {
            dry_run: true,
            ..Default::default()
        };

        let result = sync_channel(&api, dir.path(), &config(), &options, NoopReporter::shared())
            .await
            .unwrap();

        assert!(result.dry_run);
        assert_eq!(result.synced.len(), 3);
        assert!(result.commit_id.is_none());
        assert!(!dir.path().join(&result.synced[0].path).exists());
        assert_eq!(commit_count(&repo), 1);
    }

    #[tokio::test]
    async fn no_commit_leaves_files_uncommitted() {
        let (dir, repo) = init_repo();
        let api = MockApi::single_page(&CATALOG);
        let options = SyncOptions {
            no_commit: true,
            ..Default::default()
        };

        let result = sync_channel(&api, dir.path(), &config(), &options, NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(result.synced.len(), 3);
        assert!(dir.path().join(&result.synced[0].path).exists());
        assert!(result.commit_id.is_none());
        assert_eq!(commit_count(&repo), 0);
    }

    #[tokio::test]
    async fn limit_keeps_oldest_videos() {
        let (dir, _repo) = init_repo();
        let api = MockApi::single_page(&CATALOG);
        let options = SyncOptions {
            limit: Some(1),
            ..Default::default()
        };

        let result = sync_channel(&api, dir.path(), &config(), &options, NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(result.synced.len(), 1);
        assert_eq!(result.synced[0].video_id, "vidA");
        assert_eq!(result.limited, 2);
    }

    #[tokio::test]
    async fn before_bound_filters_newer_videos() {
        let (dir, _repo) = init_repo();
        let api = MockApi::single_page(&CATALOG);
        let options = SyncOptions {
            before: Some(
                DateTime::parse_from_rfc3339("2024-02-01T00:00:00Z")
                    .unwrap()
                    .to_utc(),
            ),
            ..Default::default()
        };

        let result = sync_channel(&api, dir.path(), &config(), &options, NoopReporter::shared())
            .await
            .unwrap();

        let ids: Vec<&str> = result.synced.iter().map(|e| e.video_id.as_str()).collect();
        assert_eq!(ids, vec!["vidA", "vidB"]);
    }

    #[tokio::test]
    async fn commit_failure_is_a_warning() {
        // plain directory, not a repository
        let dir = tempfile::tempdir().unwrap();
        let api = MockApi::single_page(&CATALOG);

        let result = sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert_eq!(result.synced.len(), 3);
        assert!(dir.path().join(&result.synced[0].path).exists());
        assert!(result.commit_id.is_none());
        assert!(result.commit_warning.is_some());
    }

    #[tokio::test]
    async fn reports_plan_and_completion() {
        let (dir, repo) = init_repo();
        seed_two_episodes(&repo);
        let api = MockApi::single_page(&CATALOG);
        let recorder = Arc::new(RecordingReporter::default());

        sync_channel(
            &api,
            dir.path(),
            &config(),
            &SyncOptions::default(),
            recorder.clone(),
        )
        .await
        .unwrap();

        let events = recorder.events();
        assert!(events.iter().any(|e| matches!(
            e,
            ProgressEvent::SyncPlanReady {
                fetched: 3,
                already_synced: 0,
                to_sync: 3
            }
        )));
        assert!(matches!(
            events.last(),
            Some(ProgressEvent::SyncCompleted {
                synced_count: 3,
                failed_count: 0,
                dry_run: false,
                ..
            })
        ));
    }
}
