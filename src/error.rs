// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating the sync configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YOUTUBE_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid guest pattern '{pattern}': {source}")]
    InvalidGuestPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors returned by the YouTube Data API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("YouTube API quota exceeded. Try again later.")]
    QuotaExceeded,

    #[error("Invalid YouTube API key or request parameters (HTTP 400)")]
    InvalidCredential,

    #[error("HTTP error {status} for {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),
}

impl ApiError {
    /// Whether the failed call may succeed if issued again after a delay
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::QuotaExceeded)
    }
}

/// Errors that can occur while generating a single episode file
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid ISO 8601 duration format: {0}")]
    InvalidDuration(String),

    #[error("Invalid YouTube video ID: {0}")]
    InvalidVideoId(String),

    #[error("Failed to serialize front matter: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Errors that can occur when reading a record's front matter
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Missing front matter delimiters")]
    MissingDelimiters,

    #[error("Failed to parse front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("File is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// Errors that can occur when committing generated episodes
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Nothing to commit")]
    NothingToCommit,
}

/// Top-level errors for sync operations
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch videos: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
