// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use super::types::VideoResource;

/// Visibility of a video on YouTube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyStatus {
    Public,
    Unlisted,
    Private,
}

impl PrivacyStatus {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "unlisted" => Some(Self::Unlisted),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// A video from the channel catalog
#[derive(Debug, Clone)]
pub struct Video {
    pub video_id: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    /// ISO 8601 duration, e.g. `PT1H23M45S`
    pub duration: String,
    pub thumbnail_url: String,
    pub tags: Vec<String>,
    /// Assigned by the sync run after sorting
    pub episode_number: Option<u32>,
    pub privacy_status: Option<PrivacyStatus>,
}

impl Video {
    /// Build a video from a `videos.list` resource.
    ///
    /// Returns `None` when the resource lacks an ID, snippet, content
    /// details or a parsable publish timestamp.
    pub fn from_resource(resource: VideoResource, fallback_channel_id: &str) -> Option<Self> {
        let video_id = resource.id?;
        let snippet = resource.snippet?;
        let content_details = resource.content_details?;

        let published_at = snippet
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())?
            .with_timezone(&Utc);

        let thumbnail_url = snippet
            .thumbnails
            .best_url()
            .unwrap_or_default()
            .to_string();

        Some(Self {
            video_id,
            channel_id: snippet
                .channel_id
                .unwrap_or_else(|| fallback_channel_id.to_string()),
            title: snippet.title.unwrap_or_else(|| "Untitled".to_string()),
            description: snippet.description.unwrap_or_default(),
            published_at,
            duration: content_details
                .duration
                .unwrap_or_else(|| "PT0S".to_string()),
            thumbnail_url,
            tags: snippet.tags.unwrap_or_default(),
            episode_number: None,
            privacy_status: resource
                .status
                .and_then(|s| s.privacy_status)
                .and_then(|s| PrivacyStatus::parse(&s)),
        })
    }
}
