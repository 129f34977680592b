// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;

use super::types::{ChannelListResponse, SearchListResponse, VideoListResponse};

/// Base URL of the YouTube Data API v3
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Upper bound the API accepts for `maxResults`
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Parameters for a `search.list` call
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub max_results: u32,
    pub page_token: Option<String>,
    pub published_after: Option<DateTime<Utc>>,
}

/// YouTube API abstraction for testability
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// List the channel's videos, newest first, one page at a time
    async fn search(
        &self,
        channel_id: &str,
        params: &SearchParams,
    ) -> Result<SearchListResponse, ApiError>;

    /// Fetch snippet, content details and status for the given video IDs
    async fn video_details(&self, video_ids: &[String]) -> Result<VideoListResponse, ApiError>;

    /// Look up a channel by ID or `@handle`
    async fn verify_channel(&self, channel_id: &str) -> Result<ChannelListResponse, ApiError>;
}

/// Map an HTTP status of an API response to an error kind
pub fn classify_status(endpoint: &str, status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        403 => Err(ApiError::QuotaExceeded),
        400 => Err(ApiError::InvalidCredential),
        _ => Err(ApiError::HttpStatus {
            endpoint: endpoint.to_string(),
            status,
        }),
    }
}

/// Default YouTube API client implementation using reqwest
#[derive(Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a client for the public API endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE)
    }

    /// Create a client against a different API root (e.g. a local mock server)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let url = Url::parse_with_params(
            &format!("{}/{}", self.base_url, endpoint),
            params
                .iter()
                .map(|(k, v)| (*k, v.as_str()))
                .chain(std::iter::once(("key", self.api_key.as_str()))),
        )?;
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint, params)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        classify_status(endpoint, response.status().as_u16())?;

        let body = response.bytes().await.map_err(|e| ApiError::Request {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl VideoApi for YouTubeClient {
    async fn search(
        &self,
        channel_id: &str,
        params: &SearchParams,
    ) -> Result<SearchListResponse, ApiError> {
        let mut query = vec![
            ("part", "id,snippet".to_string()),
            ("channelId", channel_id.to_string()),
            ("type", "video".to_string()),
            ("order", "date".to_string()),
            (
                "maxResults",
                params.max_results.clamp(1, MAX_RESULTS_PER_PAGE).to_string(),
            ),
        ];
        if let Some(token) = &params.page_token {
            query.push(("pageToken", token.clone()));
        }
        if let Some(after) = params.published_after {
            query.push((
                "publishedAfter",
                after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        self.get_json("search", &query).await
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<VideoListResponse, ApiError> {
        let query = [
            ("part", "snippet,contentDetails,status".to_string()),
            ("id", video_ids.join(",")),
        ];
        self.get_json("videos", &query).await
    }

    async fn verify_channel(&self, channel_id: &str) -> Result<ChannelListResponse, ApiError> {
        let lookup = if channel_id.starts_with('@') {
            "forHandle"
        } else {
            "id"
        };
        let query = [
            ("part", "snippet,contentDetails".to_string()),
            (lookup, channel_id.to_string()),
        ];

        let response: ChannelListResponse = self.get_json("channels", &query).await?;
        if response.items.is_empty() {
            return Err(ApiError::ChannelNotFound(channel_id.to_string()));
        }
        Ok(response)
    }
}
