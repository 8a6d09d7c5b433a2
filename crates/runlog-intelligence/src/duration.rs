// ABOUTME: Time-on-feet aggregation over a date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use runlog_core::models::Run;

/// Total seconds run on days in `[start, end]`
#[must_use]
pub fn total_seconds(runs: &[Run], start: NaiveDate, end: NaiveDate) -> f64 {
    runs.iter()
        .filter(|run| run.is_within(start, end))
        .map(|run| run.duration)
        .sum()
}
