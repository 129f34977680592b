// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::episode::Guest;
use crate::error::FrontmatterError;

const DELIMITER: &str = "---";

/// Availability of the video behind an episode page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    Available,
    Unavailable,
    Private,
}

/// YAML front matter of a generated episode page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeFrontmatter {
    pub title: String,
    /// Publish date, `YYYY-MM-DD`
    pub date: String,
    pub draft: bool,
    pub episode_number: u32,
    /// Key used to recognise the episode in git history
    pub youtube_id: String,
    pub thumbnail: String,
    pub duration: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guests: Vec<Guest>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub synced_at: String,
    pub status: EpisodeStatus,
}

/// Lenient view of an episode header: only the video ID is read, every
/// other key is ignored whatever its type
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordHeader {
    pub youtube_id: Option<String>,
}

/// Serialize front matter and body into a Markdown document
pub fn render_document(
    frontmatter: &EpisodeFrontmatter,
    body: &str,
) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(frontmatter)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"))
}

/// Parse the YAML block between the leading `---` line and the next `---` line
pub fn parse_frontmatter<T: DeserializeOwned>(content: &str) -> Result<T, FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix(DELIMITER)
        .and_then(|rest| rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')))
        .ok_or(FrontmatterError::MissingDelimiters)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Ok(serde_yaml::from_str(&rest[..offset])?);
        }
        offset += line.len();
    }

    Err(FrontmatterError::MissingDelimiters)
}
