// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::GenerateError;

/// Default episode file naming pattern
pub const DEFAULT_FILE_NAME_PATTERN: &str = "{number}-{slug}.md";

/// Slug used when a title has no alphanumeric characters at all
const FALLBACK_SLUG: &str = "episode";

/// Generate an episode filename: `042-the-future-of-money.md`
pub fn generate_filename(episode_number: u32, title: &str) -> Result<String, GenerateError> {
    generate_filename_with_pattern(DEFAULT_FILE_NAME_PATTERN, episode_number, title)
}

/// Generate an episode filename from a pattern containing `{number}` and `{slug}`.
///
/// The number is zero-padded to three digits; larger numbers widen the field.
/// A `.md` extension is appended when the pattern lacks one.
pub fn generate_filename_with_pattern(
    pattern: &str,
    episode_number: u32,
    title: &str,
) -> Result<String, GenerateError> {
    if episode_number == 0 {
        return Err(GenerateError::InvalidArgument(format!(
            "Episode number must be positive, got: {}",
            episode_number
        )));
    }

    if title.trim().is_empty() {
        return Err(GenerateError::InvalidArgument(
            "Title cannot be empty".to_string(),
        ));
    }

    let mut slug = slugify(title);
    if slug.is_empty() {
        slug = FALLBACK_SLUG.to_string();
    }

    let filename = pattern
        .replace("{number}", &format!("{:03}", episode_number))
        .replace("{slug}", &slug);

    if filename.ends_with(".md") {
        Ok(filename)
    } else {
        Ok(format!("{}.md", filename))
    }
}

/// Lowercase the title and collapse every run of non-alphanumeric
/// characters into a single dash, trimming dashes at both ends
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_separator = true;

    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('-');
            last_was_separator = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}
