// ABOUTME: Run listing: date-range filtering and ordering by any run field
// ABOUTME: Sorting is stable, so runs with equal keys keep their history order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use chrono::NaiveDate;
use runlog_core::models::{Run, RunSortBy, SortOrder};

/// Runs dated inside `[start, end]`, ordered by `sort_by` in `order`
///
/// Missing heart rates sort as `0`, missing shoe names as the empty string
/// and zero-distance runs as the slowest pace.
#[must_use]
pub fn list_runs(
    runs: &[Run],
    start: NaiveDate,
    end: NaiveDate,
    sort_by: RunSortBy,
    order: SortOrder,
) -> Vec<Run> {
    let mut listed: Vec<Run> = runs
        .iter()
        .filter(|run| run.is_within(start, end))
        .cloned()
        .collect();

    listed.sort_by(|a, b| {
        let ordering = compare_runs(a, b, sort_by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    listed
}

fn compare_runs(a: &Run, b: &Run, sort_by: RunSortBy) -> Ordering {
    match sort_by {
        RunSortBy::Date => a.date.cmp(&b.date),
        RunSortBy::Distance => a.distance.total_cmp(&b.distance),
        RunSortBy::Duration => a.duration.total_cmp(&b.duration),
        RunSortBy::Pace => pace_key(a).total_cmp(&pace_key(b)),
        RunSortBy::HeartRate => a
            .avg_heart_rate
            .unwrap_or(0.0)
            .total_cmp(&b.avg_heart_rate.unwrap_or(0.0)),
        RunSortBy::Source => a.source.as_str().cmp(b.source.as_str()),
        RunSortBy::Type => a.run_type.as_str().cmp(b.run_type.as_str()),
        RunSortBy::Shoes => a
            .shoes
            .as_deref()
            .unwrap_or_default()
            .cmp(b.shoes.as_deref().unwrap_or_default()),
    }
}

fn pace_key(run: &Run) -> f64 {
    run.pace().unwrap_or(f64::INFINITY)
}
