// ABOUTME: runlog CLI - command-line front end for running metrics
// ABOUTME: Loads a run history and prints training load, TRIMP, duration and mileage as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily ATL/CTL/TSB for January with the configured athlete defaults
//! runlog-cli --runs runs.json training-load --start 2024-01-01 --end 2024-01-31
//!
//! # Same window for a female athlete with explicit heart rates
//! runlog-cli training-load --start 2024-01-01 --end 2024-01-31 --max-hr 185 --resting-hr 50 --sex F
//!
//! # Daily TRIMP sums
//! runlog-cli daily-trimp --start 2024-01-01 --end 2024-01-31
//!
//! # Time on feet in seconds
//! runlog-cli seconds --start 2024-01-01 --end 2024-01-31
//!
//! # Mileage queries
//! runlog-cli mileage total --start 2024-01-01 --end 2024-01-31
//! runlog-cli mileage by-day --start 2024-01-01 --end 2024-01-07
//! runlog-cli mileage avg-per-day --start 2024-01-01 --end 2024-01-31
//! runlog-cli mileage rolling --start 2024-01-01 --end 2024-01-31 --window 7
//!
//! # Runs in the window, longest first
//! runlog-cli runs --start 2024-01-01 --end 2024-01-31 --sort-by distance --order desc
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use runlog::{
    config::environment::RunlogConfig, errors::AppResult,
    metrics::{DateRange, MetricsService},
    models::{RunSortBy, Sex, SortOrder},
    run_store,
};
use std::path::PathBuf;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "runlog-cli",
    about = "Running log metrics CLI",
    long_about = "Computes TRIMP, ATL/CTL/TSB training load, time on feet and mileage from a JSON run history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Run history JSON file (falls back to `RUNLOG_RUNS_FILE`)
    #[arg(long, global = true)]
    runs: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Daily ATL, CTL and TSB
    TrainingLoad(LoadArgs),
    /// Daily TRIMP sums
    DailyTrimp(LoadArgs),
    /// Total time on feet in seconds
    Seconds(RangeArgs),
    /// Runs in the window, sorted
    Runs {
        #[command(flatten)]
        range: RangeArgs,

        /// Field to sort by: date, distance, duration, pace, heart_rate, source, type, shoes
        #[arg(long, default_value_t = RunSortBy::Date)]
        sort_by: RunSortBy,

        /// Sort direction: asc or desc
        #[arg(long, default_value_t = SortOrder::Desc)]
        order: SortOrder,
    },
    /// Mileage aggregates
    Mileage {
        #[command(subcommand)]
        action: MileageCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MileageCommand {
    /// Total miles over the range
    Total(RangeArgs),
    /// Miles run on each day
    ByDay(RangeArgs),
    /// Average miles per calendar day
    AvgPerDay(RangeArgs),
    /// Trailing multi-day mileage sums
    Rolling {
        #[command(flatten)]
        range: RangeArgs,

        /// Window length in days
        #[arg(long, default_value_t = 7)]
        window: u32,
    },
}

/// Inclusive date window shared by every command
#[derive(Args)]
struct RangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,
}

impl RangeArgs {
    /// Validate into a [`DateRange`], rejecting `end < start`
    fn to_range(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end)
    }
}

/// Date window plus optional athlete physiology overrides
#[derive(Args)]
struct LoadArgs {
    #[command(flatten)]
    range: RangeArgs,

    /// Maximum heart rate in bpm (falls back to `RUNLOG_MAX_HR`)
    #[arg(long)]
    max_hr: Option<f64>,

    /// Resting heart rate in bpm (falls back to `RUNLOG_RESTING_HR`)
    #[arg(long)]
    resting_hr: Option<f64>,

    /// Sex for the Banister weighting, M or F (falls back to `RUNLOG_SEX`)
    #[arg(long)]
    sex: Option<Sex>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RunlogConfig::from_env()?;

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    info!("{}", config.summary());

    let runs_path = config.resolve_runs_file(cli.runs.as_deref())?;
    let service = MetricsService::new(run_store::load_runs(&runs_path)?);

    match cli.command {
        Command::TrainingLoad(args) => {
            commands::training_load::training_load(&service, &config, &args)
        }
        Command::DailyTrimp(args) => commands::training_load::daily_trimp(&service, &config, &args),
        Command::Seconds(range) => commands::duration::seconds(&service, &range),
        Command::Runs {
            range,
            sort_by,
            order,
        } => commands::runs::list(&service, &range, sort_by, order),
        Command::Mileage { action } => match action {
            MileageCommand::Total(range) => commands::mileage::total(&service, &range),
            MileageCommand::ByDay(range) => commands::mileage::by_day(&service, &range),
            MileageCommand::AvgPerDay(range) => commands::mileage::avg_per_day(&service, &range),
            MileageCommand::Rolling { range, window } => {
                commands::mileage::rolling(&service, &range, window)
            }
        },
    }
}
