// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::LazyLock;

use regex::Regex;

/// Characters with Markdown meaning that are escaped in descriptions
static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([*_`\[\]()])").expect("valid regex"));

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Canonical watch page for a video
pub fn watch_url(video_id: &str) -> String {
    format!("https://youtube.com/watch?v={}", video_id)
}

/// Convert a plain-text video description to Markdown.
///
/// Steps, in order:
/// 1. Escape `*`, `_`, backticks, brackets and parentheses with a backslash
/// 2. Wrap bare `http(s)://` URLs as `[url](url)`
/// 3. Turn newlines into hard line breaks (two spaces + newline)
/// 4. Truncate to `truncate_at` characters and append a "Read more" link
///
/// Truncation runs last, so it may cut through link markup from step 2.
pub fn convert_description_to_markdown(
    description: &str,
    video_id: &str,
    truncate_at: usize,
) -> String {
    if description.is_empty() {
        return String::new();
    }

    let escaped = SPECIAL_CHARS.replace_all(description, r"\$1");
    let linked = BARE_URL.replace_all(&escaped, "[$0]($0)");
    let markdown = linked.replace('\n', "  \n");

    if markdown.chars().count() <= truncate_at {
        return markdown;
    }

    let truncated: String = markdown.chars().take(truncate_at).collect();
    format!(
        "{}...\n\n[Read more on YouTube]({})",
        truncated.trim_end(),
        watch_url(video_id)
    )
}
