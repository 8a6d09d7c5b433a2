// ABOUTME: Main library entry point for the runlog running-metrics toolkit
// ABOUTME: Wires configuration, logging, run loading and the metrics facade together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog
//!
//! Turns a personal running log into training-stress and volume metrics:
//! per-run TRIMP, daily ATL/CTL/TSB, time-on-feet and mileage aggregates.
//!
//! ## Architecture
//!
//! - **`runlog-core`**: error types, domain models and constants
//! - **`runlog-intelligence`**: the pure metric computations
//! - **This crate**: environment configuration, structured logging, JSON run
//!   loading and the [`metrics::MetricsService`] facade used by `runlog-cli`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runlog::config::environment::RunlogConfig;
//! use runlog::errors::AppResult;
//! use runlog::metrics::{DateRange, MetricsService};
//! use runlog::run_store;
//! use chrono::NaiveDate;
//!
//! fn main() -> AppResult<()> {
//!     let config = RunlogConfig::from_env()?;
//!     let runs = run_store::load_runs("runs.json")?;
//!     let service = MetricsService::new(runs);
//!
//!     let range = DateRange::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
//!         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default(),
//!     )?;
//!     let query = config.athlete.query(range);
//!     let load = service.training_load(&query)?;
//!     println!("{} days of training load", load.len());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Query facade over a loaded run history
pub mod metrics;

/// JSON run history loading
pub mod run_store;

// Re-export the workspace crates so binaries and tests have a single entry point
pub use runlog_core::{constants, errors, models};
pub use runlog_intelligence as intelligence;
