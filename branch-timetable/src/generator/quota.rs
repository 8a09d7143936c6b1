/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Weekly-hours advisory.
//!
//! # Status: warning only
//!
//! Each subject carries a requested `hours_per_week`, but the slot walk hands
//! out periods purely by rotation.  After every generation the scheduler
//! compares what each subject actually received against what it asked for
//! and logs the mismatches.  The timetable is returned unchanged either way.
//!
//! Slots are credited by rotation position, not by name: the k-th placed
//! slot belongs to the k-th subject (mod N) in stable priority order, exactly
//! as the walk assigned it.  A subject listed twice is counted twice.

use crate::model::{Subject, TimetableSlot};

/// Requested vs scheduled time for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectHours {
    pub name: String,
    pub code: String,
    pub requested_hours: u32,
    /// Number of slots this subject received across the week.
    pub scheduled_periods: usize,
    /// `scheduled_periods × period_duration`.
    pub scheduled_minutes: u32,
}

impl SubjectHours {
    /// `true` if the subject received exactly its requested weekly time.
    pub fn is_met(&self) -> bool {
        self.scheduled_minutes == self.requested_hours.saturating_mul(60)
    }

    /// Scheduled time in hours, for display.
    pub fn scheduled_hours(&self) -> f64 {
        f64::from(self.scheduled_minutes) / 60.0
    }
}

/// Tally scheduled time per subject, in `subjects` order.
///
/// `slots` must come from the walk over these same `subjects`.
pub fn weekly_hours(
    slots: &[TimetableSlot],
    subjects: &[Subject],
    period_duration: u32,
) -> Vec<SubjectHours> {
    let mut rotation: Vec<usize> = (0..subjects.len()).collect();
    rotation.sort_by_key(|&i| subjects[i].priority);

    let mut counts = vec![0usize; subjects.len()];
    if !rotation.is_empty() {
        for k in 0..slots.len() {
            counts[rotation[k % rotation.len()]] += 1;
        }
    }

    subjects
        .iter()
        .zip(counts)
        .map(|(subject, scheduled_periods)| {
            let periods = u32::try_from(scheduled_periods).unwrap_or(u32::MAX);
            SubjectHours {
                name: subject.name.clone(),
                code: subject.code.clone(),
                requested_hours: subject.hours_per_week,
                scheduled_periods,
                scheduled_minutes: periods.saturating_mul(period_duration),
            }
        })
        .collect()
}

/// Subjects whose scheduled time differs from their requested weekly hours.
///
/// Returns an empty `Vec` when every subject is satisfied.
pub fn check_weekly_hours(
    slots: &[TimetableSlot],
    subjects: &[Subject],
    period_duration: u32,
) -> Vec<SubjectHours> {
    weekly_hours(slots, subjects, period_duration)
        .into_iter()
        .filter(|h| !h.is_met())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
