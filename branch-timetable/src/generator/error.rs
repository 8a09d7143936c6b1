/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for timetable generation.
//!
//! Most variants are *caller-side* rejections raised by
//! [`BranchScheduler::generate()`](super::BranchScheduler::generate) before the
//! slot walk runs; the walk itself only fails on
//! [`GenerateError::InvalidConfiguration`].
//!
//! | Variant | Raised by |
//! |---|---|
//! | `NoHallsSelected` / `NoSubjects` | `BranchScheduler` |
//! | `PeriodDurationOutOfRange` / `SemesterOutOfRange` | `BranchScheduler` |
//! | `InvalidTimeWindow` | `BranchScheduler` |
//! | `InvalidConfiguration` | `generate_slots` |

use thiserror::Error;

use crate::clock::WallClock;

/// Why a timetable could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The hall selection is empty.
    #[error("please select at least one lecture hall")]
    NoHallsSelected,

    /// The subject list is empty.
    #[error("please add at least one subject")]
    NoSubjects,

    /// `period_duration` is outside the accepted range.
    #[error("period duration {minutes} min is outside {min}-{max} min")]
    PeriodDurationOutOfRange { minutes: u32, min: u32, max: u32 },

    /// `semester` is zero or beyond the branch's last semester.
    #[error("semester {semester} is outside 1-{total_semesters} for branch '{branch}'")]
    SemesterOutOfRange {
        semester: u32,
        total_semesters: u32,
        branch: String,
    },

    /// The day window and break are not ordered
    /// `start < break_start < break_end < end`.
    #[error(
        "time window {start}-{end} with break {break_start}-{break_end} must satisfy \
         start < break start < break end < end"
    )]
    InvalidTimeWindow {
        start: WallClock,
        end: WallClock,
        break_start: WallClock,
        break_end: WallClock,
    },

    /// Input the slot walk cannot operate on at all.
    #[error("invalid timetable configuration: {0}")]
    InvalidConfiguration(String),
}
