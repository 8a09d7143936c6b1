/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Wall-clock helpers: `HH:MM` parsing and formatting.
//!
//! All timetable arithmetic happens in *minutes since midnight*.  Parsing is
//! strict (hours `0..=23`, minutes `0..=59`); formatting is not wrapped at
//! midnight so a period ending past `24:00` is rendered as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ── Error type ────────────────────────────────────────────────────────────────

/// Reasons an `HH:MM` string cannot be turned into a [`WallClock`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The string is not two `:`-separated numeric fields.
    #[error("'{0}' is not a valid HH:MM time")]
    Malformed(String),

    /// Hours or minutes are outside a single day.
    #[error("'{input}' is out of range (hours 0-23, minutes 0-59)")]
    OutOfRange { input: String },
}

// ── WallClock ─────────────────────────────────────────────────────────────────

/// A time of day with minute precision.
///
/// Serialised as the zero-padded `HH:MM` string it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallClock(u32);

impl WallClock {
    /// Build from hours and minutes.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ClockError> {
        if hours >= 24 || minutes >= 60 {
            return Err(ClockError::OutOfRange {
                input: format!("{hours}:{minutes}"),
            });
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Build from a minute count already known to be below [`MINUTES_PER_DAY`].
    pub(crate) const fn from_minutes_unchecked(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for WallClock {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (h, m) = trimmed
            .split_once(':')
            .ok_or_else(|| ClockError::Malformed(s.to_string()))?;

        let parse_field = |field: &str| -> Result<u32, ClockError> {
            if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ClockError::Malformed(s.to_string()));
            }
            field
                .parse::<u32>()
                .map_err(|_| ClockError::Malformed(s.to_string()))
        };

        let hours = parse_field(h)?;
        let minutes = parse_field(m)?;

        WallClock::new(hours, minutes).map_err(|_| ClockError::OutOfRange {
            input: s.to_string(),
        })
    }
}

impl TryFrom<String> for WallClock {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallClock> for String {
    fn from(value: WallClock) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Format minutes since midnight as zero-padded `HH:MM`.
///
/// Does not wrap: `1470` becomes `"24:30"`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
