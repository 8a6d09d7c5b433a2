// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup, date helpers and a Run builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `runlog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::{Duration, NaiveDate};
use runlog::models::{Run, RunSource, RunType};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a date, panicking on impossible input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Fluent factory for [`Run`] records with sensible defaults
///
/// Defaults: 2024-01-15, outdoor, 5 miles, 40 minutes, Strava, no heart rate.
#[derive(Debug, Clone)]
pub struct RunBuilder {
    run: Run,
}

impl Default for RunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunBuilder {
    pub fn new() -> Self {
        Self {
            run: Run {
                date: date(2024, 1, 15),
                run_type: RunType::OutdoorRun,
                distance: 5.0,
                duration: 2_400.0,
                source: RunSource::Strava,
                avg_heart_rate: None,
                shoes: None,
            },
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.run.date = date;
        self
    }

    pub fn distance(mut self, miles: f64) -> Self {
        self.run.distance = miles;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.run.duration = seconds;
        self
    }

    pub fn heart_rate(mut self, bpm: f64) -> Self {
        self.run.avg_heart_rate = Some(bpm);
        self
    }

    pub fn treadmill(mut self) -> Self {
        self.run.run_type = RunType::TreadmillRun;
        self
    }

    pub fn source(mut self, source: RunSource) -> Self {
        self.run.source = source;
        self
    }

    pub fn shoes(mut self, name: &str) -> Self {
        self.run.shoes = Some(name.to_owned());
        self
    }

    pub fn build(self) -> Run {
        self.run
    }
}

/// One heart-rate run per day from `first` through `last`, all identical
pub fn daily_runs(first: NaiveDate, last: NaiveDate, avg_hr: f64, duration: f64) -> Vec<Run> {
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            RunBuilder::new()
                .on(day)
                .heart_rate(avg_hr)
                .duration(duration)
                .build()
        })
        .collect()
}

/// Shift a date by a signed number of days
pub fn days_after(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}
