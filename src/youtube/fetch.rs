// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::progress::{ProgressEvent, SharedProgressReporter};

use super::client::{MAX_RESULTS_PER_PAGE, SearchParams, VideoApi};
use super::video::Video;

/// Fixed backoff schedule: one delay per retry, consumed in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delays: Vec<Duration>,
}

impl RetryPolicy {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// Single attempt, no retries
    pub fn none() -> Self {
        Self::default()
    }

    pub fn max_attempts(&self) -> usize {
        self.delays.len() + 1
    }
}

/// Options for fetching a channel's catalog
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Channel ID (`UC...`) or `@handle`
    pub channel_id: String,
    /// Server-side lower bound on the publish time
    pub published_after: Option<DateTime<Utc>>,
    /// Client-side upper bound on the publish time (inclusive)
    pub published_before: Option<DateTime<Utc>>,
    /// Stop paginating once this many videos were collected
    pub max_videos: Option<usize>,
}

/// Run an API call, retrying retryable failures according to the policy.
///
/// Before each retry the next delay of the schedule is slept. A
/// non-retryable error is returned at once without consuming delays.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    reporter: &SharedProgressReporter,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    for (index, delay) in policy.delays.iter().enumerate() {
        match operation().await {
            Err(e) if e.is_retryable() => {
                reporter.report(ProgressEvent::RetryScheduled {
                    attempt: index + 1,
                    max_retries: policy.delays.len(),
                    delay: *delay,
                    error: e.to_string(),
                });
                tokio::time::sleep(*delay).await;
            }
            result => return result,
        }
    }

    operation().await
}

/// Resolve an `@handle` to the channel ID the search endpoint expects
async fn resolve_channel_id<A: VideoApi + ?Sized>(
    api: &A,
    channel_id: &str,
    policy: &RetryPolicy,
    reporter: &SharedProgressReporter,
) -> Result<String, ApiError> {
    if !channel_id.starts_with('@') {
        return Ok(channel_id.to_string());
    }

    let response = with_retry(policy, reporter, move || api.verify_channel(channel_id)).await?;
    response
        .items
        .into_iter()
        .next()
        .map(|channel| channel.id)
        .ok_or_else(|| ApiError::ChannelNotFound(channel_id.to_string()))
}

/// Fetch the channel's videos page by page.
///
/// Each search page is resolved to full video details immediately.
/// Pagination ends when there is no next page token, a page contains no
/// videos, or `max_videos` has been reached.
pub async fn fetch_channel_videos<A: VideoApi + ?Sized>(
    api: &A,
    options: &FetchOptions,
    policy: &RetryPolicy,
    reporter: &SharedProgressReporter,
) -> Result<Vec<Video>, ApiError> {
    let channel_id = resolve_channel_id(api, &options.channel_id, policy, reporter).await?;
    let channel_id = channel_id.as_str();

    let mut videos = Vec::new();
    let mut page_token: Option<String> = None;
    let mut page = 0;

    loop {
        page += 1;
        reporter.report(ProgressEvent::FetchingPage {
            page,
            published_after: options.published_after,
        });

        let params = SearchParams {
            max_results: MAX_RESULTS_PER_PAGE,
            page_token: page_token.take(),
            published_after: options.published_after,
        };
        let params = &params;
        let search = with_retry(policy, reporter, move || api.search(channel_id, params)).await?;

        let video_ids: Vec<String> = search
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();

        if video_ids.is_empty() {
            break;
        }

        let ids = video_ids.as_slice();
        let details = with_retry(policy, reporter, move || api.video_details(ids)).await?;

        let before_page = videos.len();
        for resource in details.items {
            let Some(video) = Video::from_resource(resource, channel_id) else {
                continue;
            };

            if let Some(before) = options.published_before
                && video.published_at > before
            {
                continue;
            }

            videos.push(video);
        }

        reporter.report(ProgressEvent::PageFetched {
            page,
            videos: videos.len() - before_page,
        });

        page_token = search.next_page_token;
        if page_token.is_none() {
            break;
        }

        if options.max_videos.is_some_and(|max| videos.len() >= max) {
            break;
        }
    }

    Ok(videos)
}
