// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::episode::{DEFAULT_FILE_NAME_PATTERN, GuestParser, GuestPattern, default_guest_patterns};
use crate::error::ConfigError;
use crate::youtube::RetryPolicy;

/// Environment variable holding the YouTube Data API key
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Configuration for a sync run.
///
/// Every field except the API key can be set from a JSON file with
/// camelCase keys; missing keys fall back to the defaults. The API key is
/// only ever read from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    #[serde(skip)]
    pub youtube_api_key: String,
    /// Channel ID or `@handle`
    pub channel_id: String,
    /// Episode directory, relative to the repository root
    pub output_directory: String,
    pub file_name_pattern: String,
    /// Generated episodes get `draft: false` when set
    pub auto_publish: bool,
    /// Ignore the last sync time and fetch the whole catalog
    pub full_sync: bool,
    /// Stop paginating after this many videos
    pub max_videos: Option<usize>,
    pub include_video_embed: bool,
    pub truncate_description_at: usize,
    pub guest_parsing_patterns: Vec<GuestPattern>,
    pub excluded_video_ids: Vec<String>,
    pub retry_attempts: usize,
    #[serde(rename = "retryBackoff")]
    pub retry_backoff_ms: Vec<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            youtube_api_key: String::new(),
            channel_id: "@thebtcpodcast".to_string(),
            output_directory: "content/episodes".to_string(),
            file_name_pattern: DEFAULT_FILE_NAME_PATTERN.to_string(),
            auto_publish: false,
            full_sync: false,
            max_videos: None,
            include_video_embed: true,
            truncate_description_at: 5000,
            guest_parsing_patterns: default_guest_patterns(),
            excluded_video_ids: Vec::new(),
            retry_attempts: 3,
            retry_backoff_ms: vec![60_000, 300_000, 900_000],
        }
    }
}

impl SyncConfig {
    /// Check the configuration before any network or git access
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.youtube_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.channel_id.trim().is_empty() {
            return Err(ConfigError::Invalid("channelId cannot be empty".to_string()));
        }
        if self.output_directory.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "outputDirectory cannot be empty".to_string(),
            ));
        }
        if self.truncate_description_at == 0 {
            return Err(ConfigError::Invalid(
                "truncateDescriptionAt must be positive".to_string(),
            ));
        }
        if !self.file_name_pattern.contains("{number}") || !self.file_name_pattern.contains("{slug}")
        {
            return Err(ConfigError::Invalid(format!(
                "fileNamePattern must contain {{number}} and {{slug}}, got: {}",
                self.file_name_pattern
            )));
        }
        self.guest_parser()?;
        Ok(())
    }

    /// Compile the configured guest patterns
    pub fn guest_parser(&self) -> Result<GuestParser, ConfigError> {
        GuestParser::new(&self.guest_parsing_patterns)
    }

    /// The backoff schedule: the first `retry_attempts` configured delays
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_backoff_ms
                .iter()
                .take(self.retry_attempts)
                .map(|ms| Duration::from_millis(*ms))
                .collect(),
        )
    }
}

/// Load the configuration from an optional JSON file and the environment
pub fn load_config(path: Option<&Path>) -> Result<SyncConfig, ConfigError> {
    load_config_with_key(path, std::env::var(API_KEY_ENV).ok())
}

/// Load the configuration with an explicitly supplied API key
pub fn load_config_with_key(
    path: Option<&Path>,
    api_key: Option<String>,
) -> Result<SyncConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => SyncConfig::default(),
    };

    config.youtube_api_key = api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<SyncConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
