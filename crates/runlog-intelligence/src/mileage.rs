// ABOUTME: Distance aggregation: totals, daily averages, per-day and rolling mileage
// ABOUTME: Rolling sums look back before the window start so the first day is complete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, VecDeque};

use chrono::{Days, NaiveDate};
use runlog_core::constants::units::MILEAGE_ROUNDING_DECIMALS;
use runlog_core::errors::{AppError, AppResult};
use runlog_core::models::{DayMileage, Run};

/// Total miles run on days in `[start, end]`
#[must_use]
pub fn total_mileage(runs: &[Run], start: NaiveDate, end: NaiveDate) -> f64 {
    runs.iter()
        .filter(|run| run.is_within(start, end))
        .map(|run| run.distance)
        .sum()
}

/// Average miles per calendar day in `[start, end]`, rest days included
///
/// Returns `0.0` when `end < start`.
#[must_use]
pub fn avg_miles_per_day(runs: &[Run], start: NaiveDate, end: NaiveDate) -> f64 {
    let total_days = (end - start).num_days() + 1;
    if total_days <= 0 {
        return 0.0;
    }
    total_mileage(runs, start, end) / total_days as f64
}

/// Miles run on each day in `[start, end]`
#[must_use]
pub fn miles_by_day(runs: &[Run], start: NaiveDate, end: NaiveDate) -> Vec<DayMileage> {
    // A one-day window has no lookback, so it cannot leave the date range
    rolling(runs, start, end, 1).unwrap_or_default()
}

/// Rolling sum of miles over the `window` days ending on each day in `[start, end]`
///
/// Runs up to `window - 1` days before `start` count toward the first days of
/// the output. Sums are rounded to four decimal places. An empty sequence is
/// returned when `end < start`.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `window` is zero or reaches back past
/// the earliest representable date.
pub fn rolling_sum(
    runs: &[Run],
    start: NaiveDate,
    end: NaiveDate,
    window: u32,
) -> AppResult<Vec<DayMileage>> {
    if window == 0 {
        return Err(AppError::invalid_input(
            "Rolling window must be at least one day, got 0",
        ));
    }
    rolling(runs, start, end, window)
}

fn rolling(
    runs: &[Run],
    start: NaiveDate,
    end: NaiveDate,
    window: u32,
) -> AppResult<Vec<DayMileage>> {
    if end < start {
        return Ok(Vec::new());
    }
    let lookback = Days::new(u64::from(window.saturating_sub(1)));
    let initial_date = start.checked_sub_days(lookback).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Rolling window of {window} days reaches before the earliest supported date"
        ))
    })?;

    let miles_per_day = runs
        .iter()
        .filter(|run| run.is_within(initial_date, end))
        .fold(HashMap::<NaiveDate, f64>::new(), |mut totals, run| {
            *totals.entry(run.date).or_insert(0.0) += run.distance;
            totals
        });

    // Days before the first counted run add nothing to any sum
    let first_day = miles_per_day
        .keys()
        .min()
        .map_or(start, |earliest| (*earliest).min(start));

    let mut in_window: VecDeque<(NaiveDate, f64)> = VecDeque::new();
    let mut window_sum = 0.0;

    Ok(first_day
        .iter_days()
        .take_while(|date| *date <= end)
        .filter_map(|today| {
            let today_miles = miles_per_day.get(&today).copied().unwrap_or(0.0);
            in_window.push_back((today, today_miles));
            window_sum += today_miles;

            if let Some(cutoff) = today.checked_sub_days(lookback) {
                while let Some(&(date, miles)) = in_window.front() {
                    if date >= cutoff {
                        break;
                    }
                    window_sum -= miles;
                    in_window.pop_front();
                }
            }

            (today >= start).then(|| DayMileage {
                date: today,
                mileage: round_mileage(window_sum),
            })
        })
        .collect())
}

fn round_mileage(miles: f64) -> f64 {
    let scale = 10_f64.powi(MILEAGE_ROUNDING_DECIMALS);
    (miles * scale).round() / scale
}
