// ABOUTME: Daily TRIMP aggregation and the ATL/CTL/TSB training-load pipeline
// ABOUTME: Warms the filters up from the first heart-rate run, then truncates to the query window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training-load pipeline
//!
//! ATL and CTL are exponential averages seeded at zero. Starting them at the
//! caller's `start_date` would show every window warming up from nothing, so
//! the pipeline aggregates from the athlete's earliest heart-rate run and only
//! truncates to `[start_date, end_date]` after smoothing.

use std::collections::HashMap;

use chrono::NaiveDate;
use runlog_core::errors::{AppError, AppResult};
use runlog_core::models::{DailyTrimp, DayTrainingLoad, Run, Sex, TrainingLoad};
use tracing::debug;

use crate::algorithms::{atl_ctl_series, LoadSeries, TrimpModel};

/// Sum TRIMP per calendar day over `[start, end]`
///
/// Runs without heart rate and runs outside the span are skipped. The result
/// has exactly one entry per day, in date order, with `0.0` on days without a
/// qualifying run.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `end < start` or the heart-rate
/// parameters are unusable.
pub fn compute_daily_trimp(
    runs: &[Run],
    start: NaiveDate,
    end: NaiveDate,
    max_hr: f64,
    resting_hr: f64,
    sex: Sex,
) -> AppResult<Vec<DailyTrimp>> {
    ensure_ordered(start, end)?;
    let model = TrimpModel::new(max_hr, resting_hr, sex)?;
    Ok(daily_trimp(runs, start, end, &model))
}

/// Compute ATL, CTL and TSB for every day in `[start_date, end_date]`
///
/// `runs` should be the athlete's full history, not only the requested window.
/// When no run carries heart-rate data the result is a zero-filled series.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `end_date < start_date` or the
/// heart-rate parameters are unusable.
pub fn compute_training_load(
    runs: &[Run],
    max_hr: f64,
    resting_hr: f64,
    sex: Sex,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Vec<DayTrainingLoad>> {
    ensure_ordered(start_date, end_date)?;
    let model = TrimpModel::new(max_hr, resting_hr, sex)?;

    let earliest_run = runs
        .iter()
        .filter(|run| run.has_heart_rate())
        .map(|run| run.date)
        .min();
    if earliest_run.is_none() {
        debug!(
            runs = runs.len(),
            "No heart-rate runs in history, training load is zero"
        );
    }
    let aggregation_start = earliest_run.map_or(start_date, |date| date.min(start_date));

    let daily = daily_trimp(runs, aggregation_start, end_date, &model);
    let scores: Vec<f64> = daily.iter().map(|day| day.trimp).collect();
    let LoadSeries { atl, ctl } = atl_ctl_series(&scores);

    debug!(
        %aggregation_start,
        %start_date,
        %end_date,
        days = daily.len(),
        "Computed training load series"
    );

    Ok(daily
        .iter()
        .zip(atl.into_iter().zip(ctl))
        .filter(|(day, _)| day.date >= start_date)
        .map(|(day, (atl, ctl))| DayTrainingLoad {
            date: day.date,
            training_load: TrainingLoad::from_components(ctl, atl),
        })
        .collect())
}

fn daily_trimp(runs: &[Run], start: NaiveDate, end: NaiveDate, model: &TrimpModel) -> Vec<DailyTrimp> {
    let totals = runs
        .iter()
        .filter(|run| run.is_within(start, end))
        .filter_map(|run| {
            run.avg_heart_rate
                .map(|avg_hr| (run.date, model.score_heart_rate(avg_hr, run.duration)))
        })
        .fold(HashMap::<NaiveDate, f64>::new(), |mut totals, (date, score)| {
            *totals.entry(date).or_insert(0.0) += score;
            totals
        });

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DailyTrimp {
            date,
            trimp: totals.get(&date).copied().unwrap_or(0.0),
        })
        .collect()
}

fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        return Err(AppError::invalid_input(format!(
            "End date {end} is before start date {start}"
        )));
    }
    Ok(())
}
