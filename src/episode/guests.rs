// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A guest parsed from a video description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    /// Social handle without the leading `@`
    #[serde(rename = "twitter", default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Reserved for manual editing after sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Guest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            bio: None,
        }
    }

    pub fn from_handle(handle: impl Into<String>) -> Self {
        let handle = handle.into();
        Self {
            name: handle.clone(),
            handle: Some(handle),
            bio: None,
        }
    }
}

/// How the capture of a guest pattern is turned into guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// First match only; capture group 1 is a `,`/`&` separated name list
    List,
    /// Every match in the text; capture group 1 is a handle
    Mentions,
}

/// A configurable guest extraction pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPattern {
    pub pattern: String,
    pub kind: PatternKind,
}

impl GuestPattern {
    fn new(pattern: &str, kind: PatternKind) -> Self {
        Self {
            pattern: pattern.to_string(),
            kind,
        }
    }
}

/// The built-in patterns, in priority order
pub fn default_guest_patterns() -> Vec<GuestPattern> {
    vec![
        GuestPattern::new(r"\bguests?:[ \t]*([^\n]+)", PatternKind::List),
        GuestPattern::new(
            r"\b(?:featuring|feat\.|ft\.)[ \t]*:?[ \t]*([^\n]+)",
            PatternKind::List,
        ),
        GuestPattern::new(r"\bwith\s+@(\w+)", PatternKind::Mentions),
        GuestPattern::new(r"\binterview with[ \t]+([^\n]+)", PatternKind::List),
    ]
}

/// Extracts guests from free text using an ordered pattern cascade.
///
/// Patterns are tried in order and the first one that matches decides the
/// result; results of different patterns are never merged.
#[derive(Debug, Clone)]
pub struct GuestParser {
    matchers: Vec<(Regex, PatternKind)>,
}

impl GuestParser {
    /// Compile the given patterns (case-insensitive)
    pub fn new(patterns: &[GuestPattern]) -> Result<Self, ConfigError> {
        let matchers = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(&p.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (regex, p.kind))
                    .map_err(|e| ConfigError::InvalidGuestPattern {
                        pattern: p.pattern.clone(),
                        source: e,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { matchers })
    }

    /// Parse guests from a description. Returns an empty list when nothing matches.
    pub fn parse(&self, description: &str) -> Vec<Guest> {
        if description.is_empty() {
            return Vec::new();
        }

        for (regex, kind) in &self.matchers {
            match kind {
                PatternKind::List => {
                    let Some(captures) = regex.captures(description) else {
                        continue;
                    };
                    let names = captures
                        .get(1)
                        .or_else(|| captures.get(0))
                        .map(|m| m.as_str().trim())
                        .unwrap_or_default();
                    if names.is_empty() {
                        continue;
                    }
                    return split_names(names);
                }
                PatternKind::Mentions => {
                    let guests: Vec<Guest> = regex
                        .captures_iter(description)
                        .filter_map(|c| c.get(1))
                        .map(|m| Guest::from_handle(m.as_str()))
                        .collect();
                    if !guests.is_empty() {
                        return guests;
                    }
                }
            }
        }

        Vec::new()
    }
}

impl Default for GuestParser {
    fn default() -> Self {
        Self::new(&default_guest_patterns()).expect("default guest patterns are valid")
    }
}

fn split_names(names: &str) -> Vec<Guest> {
    names
        .split([',', '&'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Guest::named)
        .collect()
}
