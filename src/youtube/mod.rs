// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod client;
mod fetch;
mod types;
mod video;

pub use client::{
    DEFAULT_API_BASE, MAX_RESULTS_PER_PAGE, SearchParams, VideoApi, YouTubeClient,
    classify_status,
};
pub use fetch::{FetchOptions, RetryPolicy, fetch_channel_videos, with_retry};
pub use types::{
    ChannelListResponse, ChannelResource, ChannelSnippet, ContentDetails, SearchListResponse,
    SearchResult, SearchResultId, Thumbnail, Thumbnails, VideoListResponse, VideoResource,
    VideoSnippet, VideoStatus,
};
pub use video::{PrivacyStatus, Video};
