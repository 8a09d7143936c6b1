/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Branch timetable generator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── clock         – HH:MM parsing / formatting
//! ├── model         – branch, halls, subjects, time config, slots
//! ├── config/       – YAML setup file loading
//! ├── generator/    – slot walk, BranchScheduler, weekly-hours advisory
//! └── timetable     – generated week: per-day view, text rendering
//! ```

pub mod clock;
pub mod config;
pub mod generator;
pub mod model;
pub mod timetable;
