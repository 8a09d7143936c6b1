/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

use branch_timetable::config::TimetableSetup;
use branch_timetable::generator::BranchScheduler;
use branch_timetable::timetable::Timetable;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Output format for the generated timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Generate a weekly branch timetable from a setup file.
///
/// Example:
///   branch-timetable -c setups/cse_semester_3.yaml -f json -o timetable.json
#[derive(Debug, Parser)]
#[command(
    name = "branch-timetable",
    about = "Weekly branch timetable generator",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML setup file (branch, halls, time config, subjects).
    #[arg(short = 'c', long = "setup")]
    setup: PathBuf,

    /// Generate for this semester instead of the one in the setup file.
    #[arg(short = 's', long = "semester")]
    semester: Option<u32>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the timetable here instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        setup    = %cli.setup.display(),
        semester = ?cli.semester,
        format   = ?cli.format,
        output   = ?cli.output,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let setup = TimetableSetup::load_from_file(&cli.setup)?;

    let mut time_config = setup.time_config.clone();
    if let Some(semester) = cli.semester {
        time_config.semester = semester;
    }

    let scheduler = BranchScheduler::new(Arc::new(setup.institute));
    let timetable = scheduler
        .generate(&time_config, &setup.subjects, &setup.selected_halls)
        .context("Timetable generation failed")?;

    let rendered = render(&timetable, cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Cannot write timetable to {}", path.display()))?;
            info!(
                "Generated timetable with {} slots, written to {}",
                timetable.slots.len(),
                path.display()
            );
        }
        None => {
            print!("{rendered}");
            info!("Generated timetable with {} slots", timetable.slots.len());
        }
    }

    Ok(())
}

fn render(timetable: &Timetable, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => timetable.render_text(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(timetable)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(timetable)?,
    })
}
