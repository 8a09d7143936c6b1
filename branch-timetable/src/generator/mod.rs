//! Weekly slot generation for a branch semester.
//!
//! Two layers:
//!
//! * [`generate_slots`] — the pure slot walk.  Given a [`TimeConfig`], the
//!   subjects, the selected hall ids and the institute's halls it fills Monday
//!   to Friday with back-to-back periods, skipping the break, rotating through
//!   the subjects by priority.
//! * [`BranchScheduler`] — performs the checks a caller owes the walk (a hall
//!   is selected, subjects exist, the time window is sane), runs it, and
//!   reports subjects whose weekly hours were not met.
//!
//! # Walk rules
//!
//! | Rule | Behaviour |
//! |---|---|
//! | Periods per day | `floor(((end - start) - (break_end - break_start)) / period)`, computed once |
//! | Break | An iteration whose cursor lies in `[break_start, break_end)` jumps to `break_end` and places nothing |
//! | Subject rotation | One index for the whole week, never reset per day |
//! | Hall | First institute hall whose id is selected, `"TBA"` if none |
//! | Conflicts | Not checked (capacity, professor clashes, weekly hours) |
//!
//! Because a break iteration still counts toward the per-day bound, a day
//! whose walk reaches the break places one period fewer than the bound.
//!
//! # Example
//! ```rust,ignore
//! let scheduler = BranchScheduler::new(Arc::new(institute));
//! let timetable = scheduler.generate(&time_config, &subjects, &["h1".into()])?;
//! ```

pub mod error;
pub mod quota;

pub use error::GenerateError;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clock::format_minutes;
use crate::config::Institute;
use crate::model::{
    LectureHall, Subject, SubjectList, TimeConfig, TimetableSlot, Weekday, UNASSIGNED_HALL,
};
use crate::timetable::Timetable;

use quota::check_weekly_hours;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Shortest accepted period, in minutes.
pub const MIN_PERIOD_MINUTES: u32 = 30;

/// Longest accepted period, in minutes.
pub const MAX_PERIOD_MINUTES: u32 = 120;

// ─────────────────────────────────────────────────────────────────────────────
// Pure slot walk
// ─────────────────────────────────────────────────────────────────────────────

/// Number of walk iterations per day.
///
/// The break length is subtracted whether or not the break lies inside the
/// day.  Returns `0` when the break swallows the whole window.
pub fn periods_per_day(config: &TimeConfig) -> u32 {
    if config.period_duration == 0 {
        return 0;
    }
    let start = i64::from(config.start_time.minutes());
    let end = i64::from(config.end_time.minutes());
    let break_start = i64::from(config.break_start.minutes());
    let break_end = i64::from(config.break_end.minutes());

    let total = (end - start) - (break_end - break_start);
    let periods = total.div_euclid(i64::from(config.period_duration));
    u32::try_from(periods.max(0)).unwrap_or(u32::MAX)
}

/// Resolve the hall used for every slot: the first entry of `lecture_halls`
/// whose id appears in `selected_halls`.
pub fn resolve_hall<'a>(
    selected_halls: &[String],
    lecture_halls: &'a [LectureHall],
) -> Option<&'a LectureHall> {
    lecture_halls
        .iter()
        .find(|h| selected_halls.iter().any(|id| *id == h.id))
}

/// Fill a Monday-to-Friday week with class slots.
///
/// Output is ordered by day, then by time.  Identical inputs always give an
/// identical result.
///
/// # Errors
/// [`GenerateError::InvalidConfiguration`] when `period_duration` is zero, or
/// when a period has to be placed but `subjects` is empty.
pub fn generate_slots(
    config: &TimeConfig,
    subjects: &[Subject],
    selected_halls: &[String],
    lecture_halls: &[LectureHall],
) -> Result<Vec<TimetableSlot>, GenerateError> {
    if config.period_duration == 0 {
        return Err(GenerateError::InvalidConfiguration(
            "period duration must be greater than zero".to_string(),
        ));
    }

    let start = config.start_time.minutes();
    let break_start = config.break_start.minutes();
    let break_end = config.break_end.minutes();
    let periods = periods_per_day(config);

    let mut sorted: Vec<&Subject> = subjects.iter().collect();
    sorted.sort_by_key(|s| s.priority);

    // A resolved hall without a name is shown as unassigned too.
    let hall = resolve_hall(selected_halls, lecture_halls)
        .map(|h| h.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNASSIGNED_HALL);

    debug!(
        periods_per_day = periods,
        subject_count = sorted.len(),
        hall = %hall,
        "slot walk starting"
    );

    let mut slots = Vec::with_capacity(Weekday::WEEK.len() * periods as usize);
    let mut subject_index = 0usize;

    for day in Weekday::WEEK {
        let mut current = start;

        for _ in 0..periods {
            if current >= break_start && current < break_end {
                current = break_end;
                continue;
            }

            if sorted.is_empty() {
                return Err(GenerateError::InvalidConfiguration(
                    "no subjects to place".to_string(),
                ));
            }
            let subject = sorted[subject_index % sorted.len()];
            let end = current + config.period_duration;

            slots.push(TimetableSlot {
                day: day.name().to_string(),
                day_index: day.index(),
                start_time: format_minutes(current),
                end_time: format_minutes(end),
                subject: subject.name.clone(),
                subject_code: subject.code.clone(),
                professor: subject.professor_name.clone(),
                hall: hall.to_string(),
            });

            current = end;
            subject_index += 1;
        }

        debug!(day = day.name(), placed_so_far = slots.len(), "day filled");
    }

    Ok(slots)
}

// ─────────────────────────────────────────────────────────────────────────────
// BranchScheduler
// ─────────────────────────────────────────────────────────────────────────────

/// Generates timetables for one branch of an institute.
///
/// Holds a shared reference to the institute records; every call to
/// [`generate`](Self::generate) is independent.
pub struct BranchScheduler {
    institute: Arc<Institute>,
}

impl BranchScheduler {
    pub fn new(institute: Arc<Institute>) -> Self {
        Self { institute }
    }

    /// Validate the setup session and generate the week's timetable.
    ///
    /// Checks run in this order: hall selection, subjects, period duration,
    /// semester, time window.  Selected hall ids unknown to the institute are
    /// logged and otherwise ignored.
    ///
    /// # Errors
    /// The first failing check as a [`GenerateError`].
    pub fn generate(
        &self,
        config: &TimeConfig,
        subjects: &SubjectList,
        selected_halls: &[String],
    ) -> Result<Timetable, GenerateError> {
        let branch = self.institute.branch();

        // ── Preconditions ─────────────────────────────────────────────────────
        if selected_halls.is_empty() {
            return Err(GenerateError::NoHallsSelected);
        }
        if subjects.is_empty() {
            return Err(GenerateError::NoSubjects);
        }
        Self::check_period_duration(config)?;
        if config.semester == 0 || config.semester > branch.total_semesters {
            return Err(GenerateError::SemesterOutOfRange {
                semester: config.semester,
                total_semesters: branch.total_semesters,
                branch: branch.code.clone(),
            });
        }
        Self::check_time_window(config)?;

        for id in selected_halls {
            if self.institute.get_hall(id).is_none() {
                warn!(hall_id = %id, "selected hall is not a known lecture hall");
            }
        }

        info!(
            branch = %branch.code,
            semester = config.semester,
            subject_count = subjects.len(),
            hall_count = selected_halls.len(),
            "=== BranchScheduler::generate() ==="
        );

        // ── Slot walk ─────────────────────────────────────────────────────────
        let slots = generate_slots(
            config,
            subjects.as_slice(),
            selected_halls,
            self.institute.lecture_halls(),
        )?;

        // ── Post-generation: weekly hours advisory ────────────────────────────
        for shortfall in check_weekly_hours(&slots, subjects.as_slice(), config.period_duration) {
            warn!(
                subject = %shortfall.code,
                requested_hours = shortfall.requested_hours,
                scheduled_minutes = shortfall.scheduled_minutes,
                "weekly hours not matched by generated timetable"
            );
        }

        info!(
            slot_count = slots.len(),
            periods_per_day = periods_per_day(config),
            "=== Timetable generated ==="
        );

        Ok(Timetable {
            branch_code: branch.code.clone(),
            branch_name: branch.name.clone(),
            semester: config.semester,
            time_config: config.clone(),
            slots,
        })
    }

    fn check_period_duration(config: &TimeConfig) -> Result<(), GenerateError> {
        let minutes = config.period_duration;
        if !(MIN_PERIOD_MINUTES..=MAX_PERIOD_MINUTES).contains(&minutes) {
            return Err(GenerateError::PeriodDurationOutOfRange {
                minutes,
                min: MIN_PERIOD_MINUTES,
                max: MAX_PERIOD_MINUTES,
            });
        }
        Ok(())
    }

    fn check_time_window(config: &TimeConfig) -> Result<(), GenerateError> {
        let ordered = config.start_time < config.break_start
            && config.break_start < config.break_end
            && config.break_end < config.end_time;
        if !ordered {
            return Err(GenerateError::InvalidTimeWindow {
                start: config.start_time,
                end: config.end_time,
                break_start: config.break_start,
                break_end: config.break_end,
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
