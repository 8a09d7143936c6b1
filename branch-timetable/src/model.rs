/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data structures for branch timetable generation.
//!
//! ```text
//! Institute (Branch + LectureHall records) ─┐
//! TimeConfig ───────────────────────────────┼──(generator)──►  Vec<TimetableSlot>
//! SubjectList (priority ordered) ───────────┘
//! ```
//!
//! Inputs are assembled in memory during a setup session and handed to the
//! generator once.  Nothing here is mutated by the generator; regenerating
//! means calling it again with the (possibly edited) inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::clock::WallClock;

// ── Weekday ───────────────────────────────────────────────────────────────────

/// A teaching day.  Only Monday to Friday are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// The scheduled week, in output order.
    pub const WEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position in the week (`0` = Monday).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

// ── Institute records ─────────────────────────────────────────────────────────

/// An academic program belonging to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub code: String,
    /// Number of semesters the program runs for; bounds `TimeConfig::semester`.
    pub total_semesters: u32,
}

/// A lecture hall owned by the institute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureHall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub building: String,
}

// ── TimeConfig ────────────────────────────────────────────────────────────────

/// Daily time window, period length and break for one semester's timetable.
///
/// Expected shape: `start_time < break_start < break_end < end_time`.  The
/// generator itself does not enforce this; [`BranchScheduler`] does.
///
/// [`BranchScheduler`]: crate::generator::BranchScheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub start_time: WallClock,
    pub end_time: WallClock,
    /// Length of one class period in minutes.
    pub period_duration: u32,
    pub break_start: WallClock,
    pub break_end: WallClock,
    pub semester: u32,
}

impl Default for TimeConfig {
    /// 09:00 to 17:00 in 60-minute periods with a 13:00 to 14:00 break.
    fn default() -> Self {
        Self {
            start_time: WallClock::from_minutes_unchecked(9 * 60),
            end_time: WallClock::from_minutes_unchecked(17 * 60),
            period_duration: 60,
            break_start: WallClock::from_minutes_unchecked(13 * 60),
            break_end: WallClock::from_minutes_unchecked(14 * 60),
            semester: 1,
        }
    }
}

// ── Subject ───────────────────────────────────────────────────────────────────

/// A subject to be taught, with its rank in the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque identifier assigned when the subject joins a list.
    pub id: String,
    pub name: String,
    pub code: String,
    pub professor_name: String,
    /// Requested weekly hours.  Reported on, never enforced.
    pub hours_per_week: u32,
    /// `1` is the highest priority.  Always `position + 1` inside a
    /// [`SubjectList`].
    pub priority: u32,
}

/// Default weekly hours for a newly added subject.
pub const DEFAULT_HOURS_PER_WEEK: u32 = 3;

/// The user-entered part of a subject, before it has an id or a priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub name: String,
    pub code: String,
    pub professor_name: String,
    pub hours_per_week: u32,
}

impl SubjectDraft {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        professor_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            professor_name: professor_name.into(),
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
        }
    }

    pub fn with_hours(mut self, hours_per_week: u32) -> Self {
        self.hours_per_week = hours_per_week;
        self
    }
}

// ── SubjectList ───────────────────────────────────────────────────────────────

/// Error from a reorder on a [`SubjectList`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectListError {
    #[error("subject index {index} is out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Priority-ordered subjects.
///
/// Every mutation re-derives priorities from positions, so priorities are
/// always `1..=len`, unique and contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubjectList {
    subjects: Vec<Subject>,
}

impl SubjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from subjects carrying externally supplied priorities.
    ///
    /// Subjects are stable-sorted by `priority` and then renumbered, so ties
    /// and gaps keep their relative input order.
    pub fn from_prioritized(mut subjects: Vec<Subject>) -> Self {
        subjects.sort_by_key(|s| s.priority);
        let mut list = Self { subjects };
        list.renumber();
        list
    }

    /// Append a subject at the lowest priority and return it.
    pub fn push(&mut self, draft: SubjectDraft) -> &Subject {
        let subject = Subject {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            code: draft.code,
            professor_name: draft.professor_name,
            hours_per_week: draft.hours_per_week,
            priority: ordinal(self.subjects.len()),
        };
        self.subjects.push(subject);
        &self.subjects[self.subjects.len() - 1]
    }

    /// Delete every subject with `id` and return the first of them.  The rest
    /// keep their relative order.
    pub fn remove(&mut self, id: &str) -> Option<Subject> {
        let mut removed = None;
        self.subjects.retain(|s| {
            if s.id != id {
                return true;
            }
            if removed.is_none() {
                removed = Some(s.clone());
            }
            false
        });
        if removed.is_some() {
            self.renumber();
        }
        removed
    }

    /// Move the subject at `from` so that it ends up at `to`.
    ///
    /// # Errors
    /// [`SubjectListError::IndexOutOfRange`] if either index is past the end;
    /// the list is left untouched.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<(), SubjectListError> {
        let len = self.subjects.len();
        for index in [from, to] {
            if index >= len {
                return Err(SubjectListError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let subject = self.subjects.remove(from);
        self.subjects.insert(to, subject);
        self.renumber();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn as_slice(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subject> {
        self.subjects.iter()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    fn renumber(&mut self) {
        for (i, subject) in self.subjects.iter_mut().enumerate() {
            subject.priority = ordinal(i);
        }
    }
}

/// 1-based priority for list position `index`, saturating at `u32::MAX`.
fn ordinal(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}

impl<'a> IntoIterator for &'a SubjectList {
    type Item = &'a Subject;
    type IntoIter = std::slice::Iter<'a, Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}

// ── TimetableSlot (output) ────────────────────────────────────────────────────

/// Hall name used when no selected hall could be resolved.
pub const UNASSIGNED_HALL: &str = "TBA";

/// One scheduled class period.
///
/// Field names serialise in camelCase (`dayIndex`, `startTime`, ...) to match
/// what the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    pub day: String,
    /// `0` = Monday .. `4` = Friday.
    pub day_index: u8,
    /// Zero-padded `HH:MM`.
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub subject_code: String,
    pub professor: String,
    pub hall: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
