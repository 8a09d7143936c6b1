/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Loads the bundled sample setup and generates its week end to end.

use std::path::PathBuf;
use std::sync::Arc;

use branch_timetable::config::TimetableSetup;
use branch_timetable::generator::quota::check_weekly_hours;
use branch_timetable::generator::BranchScheduler;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("setups/cse_semester_3.yaml")
}

#[test]
fn sample_setup_generates_full_week() {
    let setup = TimetableSetup::load_from_file(&sample_path()).unwrap();
    let subjects = setup.subjects.clone();
    let config = setup.time_config.clone();
    let selected = setup.selected_halls.clone();

    let scheduler = BranchScheduler::new(Arc::new(setup.institute));
    let tt = scheduler.generate(&config, &subjects, &selected).unwrap();

    // 7 iterations a day, one spent on the break.
    assert_eq!(tt.slots.len(), 30);
    assert_eq!(tt.semester, 3);

    // LH-204 precedes the lab in institute order, so it wins.
    assert!(tt.slots.iter().all(|s| s.hall == "LH-204"));

    // 30 slots over 5 subjects → 6 each, matching the requested hours.
    assert!(check_weekly_hours(&tt.slots, subjects.as_slice(), 60).is_empty());

    let days = tt.by_day();
    assert!(days.iter().all(|d| d.slots.len() == 6));
    // Monday places 6 → Tuesday opens at 6 % 5 = 1.
    assert_eq!(days[1].slots[0].subject_code, "MA201");
}

#[test]
fn sample_setup_renders_every_day() {
    let setup = TimetableSetup::load_from_file(&sample_path()).unwrap();
    let config = setup.time_config.clone();
    let subjects = setup.subjects.clone();
    let selected = setup.selected_halls.clone();

    let tt = BranchScheduler::new(Arc::new(setup.institute))
        .generate(&config, &subjects, &selected)
        .unwrap();
    let text = tt.render_text();

    for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
        assert!(text.contains(day), "{day} missing from:\n{text}");
    }
    assert!(!text.contains("No classes"));
}
