// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::GenerateError;

/// YouTube video IDs are always this long
const VIDEO_ID_LENGTH: usize = 11;

fn is_valid_video_id(video_id: &str) -> bool {
    video_id.len() == VIDEO_ID_LENGTH
        && video_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

/// Generate a responsive (16:9) iframe embed on the youtube-nocookie.com domain
pub fn generate_embed(video_id: &str) -> Result<String, GenerateError> {
    if !is_valid_video_id(video_id) {
        return Err(GenerateError::InvalidVideoId(video_id.to_string()));
    }

    Ok(format!(
        r#"<div style="position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden;">
  <iframe
    src="https://www.youtube-nocookie.com/embed/{video_id}"
    style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;"
    frameborder="0"
    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
    allowfullscreen
  ></iframe>
</div>"#
    ))
}
