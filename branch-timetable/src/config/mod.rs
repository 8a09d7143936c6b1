//! Timetable setup loading.
//!
//! A setup file stands in for the institute's stored records (the branch and
//! its lecture halls) plus one setup session (selected halls, time
//! configuration, subjects).
//!
//! The expected YAML structure is:
//! ```yaml
//! branch:
//!   id: "cse"
//!   name: "Computer Science"
//!   code: "CSE"
//!   total_semesters: 8
//! lecture_halls:
//!   - id: "lh101"
//!     name: "LH-101"
//!     capacity: 60
//!     building: "Main Block"
//! selected_halls: ["lh101"]
//! time_config:
//!   start_time: "09:00"
//!   end_time: "17:00"
//!   period_duration: 60
//!   break_start: "13:00"
//!   break_end: "14:00"
//!   semester: 1
//! subjects:
//!   - name: "Data Structures"
//!     code: "CS201"
//!     professor_name: "Dr. Mehta"
//!     hours_per_week: 4
//! ```
//!
//! `time_config` and every field in it are optional (setup form defaults).
//! Subject `priority` is optional; subjects are ordered by it when present and
//! by file order otherwise, then renumbered `1..=N`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::model::{
    Branch, LectureHall, Subject, SubjectList, TimeConfig, DEFAULT_HOURS_PER_WEEK,
};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct SetupFile {
    branch: Branch,
    #[serde(default)]
    lecture_halls: Vec<LectureHall>,
    #[serde(default)]
    selected_halls: Vec<String>,
    #[serde(default)]
    time_config: TimeConfig,
    #[serde(default)]
    subjects: Vec<SubjectEntry>,
}

/// Per-subject fields as they appear in the YAML file.
#[derive(Debug, Deserialize)]
struct SubjectEntry {
    id: Option<String>,
    name: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    professor_name: String,
    #[serde(default = "default_hours_per_week")]
    hours_per_week: u32,
    priority: Option<u32>,
}

fn default_hours_per_week() -> u32 {
    DEFAULT_HOURS_PER_WEEK
}

// ── Institute ─────────────────────────────────────────────────────────────────

/// The institute records a timetable is generated against: one branch and
/// the institute's lecture halls, in stored order.
#[derive(Debug, Clone)]
pub struct Institute {
    branch: Branch,
    lecture_halls: Vec<LectureHall>,
}

impl Institute {
    pub fn new(branch: Branch, lecture_halls: Vec<LectureHall>) -> Self {
        Self {
            branch,
            lecture_halls,
        }
    }

    pub fn branch(&self) -> &Branch {
        &self.branch
    }

    /// All lecture halls.  Order matters: the first selected one is used.
    pub fn lecture_halls(&self) -> &[LectureHall] {
        &self.lecture_halls
    }

    /// Returns the hall with `id`, or `None` if the institute has no such hall.
    pub fn get_hall(&self, id: &str) -> Option<&LectureHall> {
        self.lecture_halls.iter().find(|h| h.id == id)
    }
}

// ── TimetableSetup ────────────────────────────────────────────────────────────

/// A fully loaded setup: institute records plus the session inputs.
#[derive(Debug, Clone)]
pub struct TimetableSetup {
    pub institute: Institute,
    pub selected_halls: Vec<String>,
    pub time_config: TimeConfig,
    pub subjects: SubjectList,
}

impl TimetableSetup {
    /// Read and parse the setup file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is structurally
    /// invalid (including malformed `HH:MM` times).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading timetable setup from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open setup file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse setup file: {}", path.display()))
    }

    /// Parse a setup from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: SetupFile = serde_yaml::from_str(content).context("invalid setup YAML")?;

        let subjects: Vec<Subject> = file
            .subjects
            .into_iter()
            .map(|entry| Subject {
                id: entry.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                name: entry.name,
                code: entry.code,
                professor_name: entry.professor_name,
                hours_per_week: entry.hours_per_week,
                // Unprioritised subjects sort after prioritised ones, in file order.
                priority: entry.priority.unwrap_or(u32::MAX),
            })
            .collect();
        let subjects = SubjectList::from_prioritized(subjects);

        for subject in &subjects {
            debug!(
                "  Subject: {} | {} | {} | {}h/week | priority {}",
                subject.code,
                subject.name,
                subject.professor_name,
                subject.hours_per_week,
                subject.priority,
            );
        }

        if file.lecture_halls.is_empty() {
            warn!("No lecture halls in setup file, every slot will be TBA");
        }

        let setup = Self {
            institute: Institute::new(file.branch, file.lecture_halls),
            selected_halls: file.selected_halls,
            time_config: file.time_config,
            subjects,
        };

        info!(
            branch = %setup.institute.branch().code,
            halls = setup.institute.lecture_halls().len(),
            selected = setup.selected_halls.len(),
            subjects = setup.subjects.len(),
            "Setup loaded"
        );

        Ok(setup)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
