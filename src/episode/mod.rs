// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod duration;
mod embed;
mod filename;
mod generate;
mod guests;
mod markdown;

pub use duration::format_duration;
pub use embed::generate_embed;
pub use filename::{
    DEFAULT_FILE_NAME_PATTERN, generate_filename, generate_filename_with_pattern, slugify,
};
pub use generate::{GeneratedEpisode, generate_episode};
pub use guests::{Guest, GuestParser, GuestPattern, PatternKind, default_guest_patterns};
pub use markdown::{convert_description_to_markdown, watch_url};
