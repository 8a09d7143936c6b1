/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Generated timetable and its presentation.
//!
//! [`Timetable`] is what [`BranchScheduler::generate`] returns: the flat,
//! day-ordered slot list plus the branch and configuration it was generated
//! for.  It serialises as-is to JSON/YAML and can be regrouped per day or
//! rendered as plain text.
//!
//! [`BranchScheduler::generate`]: crate::generator::BranchScheduler::generate

use std::fmt;

use serde::Serialize;

use crate::model::{TimeConfig, TimetableSlot, Weekday};

/// One branch semester's generated week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timetable {
    pub branch_code: String,
    pub branch_name: String,
    pub semester: u32,
    pub time_config: TimeConfig,
    /// Ordered by day, then by start time.
    pub slots: Vec<TimetableSlot>,
}

/// The slots of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots<'a> {
    pub day: Weekday,
    pub slots: Vec<&'a TimetableSlot>,
}

impl Timetable {
    /// Regroup the slots per day.  Always yields all five days, Monday first;
    /// a day without classes has an empty `slots`.
    pub fn by_day(&self) -> Vec<DaySlots<'_>> {
        Weekday::WEEK
            .iter()
            .map(|&day| DaySlots {
                day,
                slots: self
                    .slots
                    .iter()
                    .filter(|s| s.day_index == day.index())
                    .collect(),
            })
            .collect()
    }

    /// Plain-text rendering; same as the [`Display`](fmt::Display) output.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

/// A configuration header followed by one block per day.
impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cfg = &self.time_config;

        writeln!(f, "** {} ({}) **", self.branch_name, self.branch_code)?;
        writeln!(
            f,
            "Semester {} | {} - {} | {} min periods | break {} - {}",
            self.semester,
            cfg.start_time,
            cfg.end_time,
            cfg.period_duration,
            cfg.break_start,
            cfg.break_end,
        )?;

        for DaySlots { day, slots } in self.by_day() {
            writeln!(f)?;
            writeln!(f, "{}", day.name())?;
            if slots.is_empty() {
                writeln!(f, "  No classes")?;
                continue;
            }
            for slot in slots {
                writeln!(
                    f,
                    "  {} - {}  {:<8} {}  ({}) @ {}",
                    slot.start_time,
                    slot.end_time,
                    slot.subject_code,
                    slot.subject,
                    slot.professor,
                    slot.hall,
                )?;
            }
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
