// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Events emitted during channel synchronization for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Git history is being scanned for previously synced episodes
    ScanningHistory { episode_directory: String },

    /// A historical episode file could not be parsed and was skipped
    HistoryRecordSkipped {
        path: String,
        commit: String,
        error: String,
    },

    /// Git history could not be read at all; sync continues from scratch
    HistoryUnavailable { error: String },

    /// Git history scan finished
    HistoryScanned {
        episode_count: usize,
        last_sync: Option<DateTime<Utc>>,
    },

    /// A page of search results is being requested
    FetchingPage {
        page: usize,
        published_after: Option<DateTime<Utc>>,
    },

    /// A page of search results has been resolved to full video details
    PageFetched { page: usize, videos: usize },

    /// A retryable API failure occurred; the call is repeated after `delay`
    RetryScheduled {
        /// 1-based retry number
        attempt: usize,
        max_retries: usize,
        delay: Duration,
        error: String,
    },

    /// A video was skipped because it is on the exclusion list
    VideoExcluded { video_id: String },

    /// Filtering and numbering finished
    SyncPlanReady {
        fetched: usize,
        already_synced: usize,
        to_sync: usize,
    },

    /// An episode file was generated (and written unless in dry-run mode)
    EpisodeGenerated {
        episode_number: u32,
        title: String,
        path: PathBuf,
    },

    /// An episode could not be generated or written
    EpisodeFailed {
        episode_number: u32,
        video_id: String,
        error: String,
    },

    /// Generated episodes were committed
    Committed {
        commit_id: String,
        episode_count: usize,
    },

    /// The commit step failed; files were left uncommitted
    CommitFailed { error: String },

    /// Sync operation completed
    SyncCompleted {
        synced_count: usize,
        skipped_count: usize,
        failed_count: usize,
        dry_run: bool,
    },
}

/// Trait for reporting progress events during synchronization.
///
/// Implementations can use this to display progress bars, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

/// Reporter that records every event, for assertions in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: std::sync::Mutex<Vec<ProgressEvent>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}
