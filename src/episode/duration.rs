// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::GenerateError;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("valid regex")
});

/// Format an ISO 8601 duration (`PT1H23M45S`) as `1:23:45`, or `45:30` when
/// there is no hour part.
pub fn format_duration(iso_duration: &str) -> Result<String, GenerateError> {
    let captures = ISO_DURATION
        .captures(iso_duration)
        .ok_or_else(|| GenerateError::InvalidDuration(iso_duration.to_string()))?;

    let component = |index: usize| -> Result<u64, GenerateError> {
        captures
            .get(index)
            .map_or(Ok(0), |m| m.as_str().parse())
            .map_err(|_| GenerateError::InvalidDuration(iso_duration.to_string()))
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    if hours > 0 {
        Ok(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Ok(format!("{}:{:02}", minutes, seconds))
    }
}
