// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};

use crate::config::SyncConfig;
use crate::error::GenerateError;
use crate::metadata::{EpisodeFrontmatter, EpisodeStatus, render_document};
use crate::youtube::{PrivacyStatus, Video};

use super::duration::format_duration;
use super::embed::generate_embed;
use super::filename::generate_filename_with_pattern;
use super::guests::{Guest, GuestParser};
use super::markdown::convert_description_to_markdown;

/// A generated episode page, not yet written to disk
#[derive(Debug, Clone)]
pub struct GeneratedEpisode {
    /// Target path relative to the repository root
    pub path: PathBuf,
    /// Complete Markdown document (front matter + body)
    pub content: String,
    pub frontmatter: EpisodeFrontmatter,
}

/// Compose the episode page for a video. Performs no I/O.
pub fn generate_episode(
    video: &Video,
    episode_number: u32,
    config: &SyncConfig,
    guest_parser: &GuestParser,
) -> Result<GeneratedEpisode, GenerateError> {
    let filename =
        generate_filename_with_pattern(&config.file_name_pattern, episode_number, &video.title)?;
    let path = PathBuf::from(&config.output_directory).join(filename);

    let guests = guest_parser.parse(&video.description);
    let description = convert_description_to_markdown(
        &video.description,
        &video.video_id,
        config.truncate_description_at,
    );
    let duration = format_duration(&video.duration)?;

    let frontmatter = EpisodeFrontmatter {
        title: video.title.clone(),
        date: video.published_at.format("%Y-%m-%d").to_string(),
        draft: !config.auto_publish,
        episode_number,
        youtube_id: video.video_id.clone(),
        thumbnail: video.thumbnail_url.clone(),
        duration,
        description: description.clone(),
        guests: guests.clone(),
        tags: video.tags.clone(),
        synced_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: match video.privacy_status {
            Some(PrivacyStatus::Private) => EpisodeStatus::Private,
            _ => EpisodeStatus::Available,
        },
    };

    let embed = if config.include_video_embed {
        Some(generate_embed(&video.video_id)?)
    } else {
        None
    };

    let body = render_body(&description, embed.as_deref(), &guests);
    let content = render_document(&frontmatter, &body)?;

    Ok(GeneratedEpisode {
        path,
        content,
        frontmatter,
    })
}

fn render_body(description: &str, embed: Option<&str>, guests: &[Guest]) -> String {
    let mut body = String::from("## Episode Description\n\n");
    body.push_str(description);
    body.push_str("\n\n");

    if let Some(embed) = embed {
        body.push_str("## Watch Episode\n\n");
        body.push_str(embed);
        body.push_str("\n\n");
    }

    if !guests.is_empty() {
        body.push_str("## Guests\n\n");
        for guest in guests {
            let line = match &guest.handle {
                Some(handle) => format!(
                    "- **{}** ([@{handle}](https://twitter.com/{handle}))\n",
                    guest.name
                ),
                None => format!("- **{}**\n", guest.name),
            };
            body.push_str(&line);
        }
        body.push('\n');
    }

    body
}
