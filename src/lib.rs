// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod commit;
pub mod config;
pub mod episode;
pub mod error;
pub mod metadata;
pub mod progress;
pub mod state;
pub mod sync;
pub mod youtube;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use commit::{commit_episodes, commit_message};
pub use config::{API_KEY_ENV, SyncConfig, load_config, load_config_with_key};
pub use episode::{
    GeneratedEpisode, Guest, GuestParser, GuestPattern, PatternKind,
    convert_description_to_markdown, format_duration, generate_embed, generate_episode,
    generate_filename, generate_filename_with_pattern,
};
pub use error::{ApiError, CommitError, ConfigError, FrontmatterError, GenerateError, SyncError};
pub use metadata::{EpisodeFrontmatter, EpisodeStatus, parse_frontmatter};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use state::{
    SyncPlan, SyncRecord, SyncState, build_sync_state, create_sync_plan, is_video_synced,
    last_sync_timestamp,
};
pub use sync::{FailedEpisode, SyncOptions, SyncResult, SyncedEpisode, sync_channel};
pub use youtube::{
    FetchOptions, RetryPolicy, Video, VideoApi, YouTubeClient, fetch_channel_videos,
};
