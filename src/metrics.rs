// ABOUTME: Query facade over a loaded run history
// ABOUTME: Validates date ranges and dispatches to the intelligence crate with structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics service
//!
//! [`MetricsService`] owns a run history and answers one query per method.
//! Range validation happens once in [`DateRange::new`], so every method can
//! rely on `start <= end`.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    avg_miles_per_day, compute_daily_trimp, compute_training_load, list_runs, miles_by_day,
    rolling_sum, total_mileage, total_seconds,
};
use crate::models::{DailyTrimp, DayMileage, DayTrainingLoad, Run, RunSortBy, Sex, SortOrder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Inclusive calendar-day range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `end` is before `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::invalid_input(format!(
                "End date {end} is before start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Range plus the athlete physiology a training-load query needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadQuery {
    /// Output window
    pub range: DateRange,
    /// Maximum heart rate in bpm
    pub max_hr: f64,
    /// Resting heart rate in bpm
    pub resting_hr: f64,
    /// Sex used for the Banister weighting
    pub sex: Sex,
}

/// Answers metric queries over an in-memory run history
#[derive(Debug, Clone, Default)]
pub struct MetricsService {
    runs: Vec<Run>,
}

impl MetricsService {
    /// Wrap a run history
    #[must_use]
    pub const fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// The runs this service answers for
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Runs dated inside the range, ordered by `sort_by`
    #[must_use]
    pub fn list_runs(&self, range: &DateRange, sort_by: RunSortBy, order: SortOrder) -> Vec<Run> {
        let listed = list_runs(&self.runs, range.start, range.end, sort_by, order);
        info!(
            start = %range.start,
            end = %range.end,
            sort_by = %sort_by,
            order = %order,
            runs = listed.len(),
            "Listed runs"
        );
        listed
    }

    /// Daily ATL/CTL/TSB over the query range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unusable heart-rate parameters
    pub fn training_load(&self, query: &TrainingLoadQuery) -> AppResult<Vec<DayTrainingLoad>> {
        let series = compute_training_load(
            &self.runs,
            query.max_hr,
            query.resting_hr,
            query.sex,
            query.range.start,
            query.range.end,
        )?;

        info!(
            start = %query.range.start,
            end = %query.range.end,
            max_hr = query.max_hr,
            resting_hr = query.resting_hr,
            sex = %query.sex,
            days = series.len(),
            "Computed training load"
        );
        Ok(series)
    }

    /// Daily TRIMP sums over the query range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unusable heart-rate parameters
    pub fn daily_trimp(&self, query: &TrainingLoadQuery) -> AppResult<Vec<DailyTrimp>> {
        let series = compute_daily_trimp(
            &self.runs,
            query.range.start,
            query.range.end,
            query.max_hr,
            query.resting_hr,
            query.sex,
        )?;

        info!(
            start = %query.range.start,
            end = %query.range.end,
            sex = %query.sex,
            days = series.len(),
            "Computed daily TRIMP"
        );
        Ok(series)
    }

    /// Total time on feet in seconds
    #[must_use]
    pub fn total_seconds(&self, range: &DateRange) -> f64 {
        let seconds = total_seconds(&self.runs, range.start, range.end);
        info!(start = %range.start, end = %range.end, seconds, "Computed total seconds");
        seconds
    }

    /// Total miles
    #[must_use]
    pub fn total_mileage(&self, range: &DateRange) -> f64 {
        let miles = total_mileage(&self.runs, range.start, range.end);
        info!(start = %range.start, end = %range.end, miles, "Computed total mileage");
        miles
    }

    /// Average miles per calendar day
    #[must_use]
    pub fn avg_miles_per_day(&self, range: &DateRange) -> f64 {
        let average = avg_miles_per_day(&self.runs, range.start, range.end);
        info!(
            start = %range.start,
            end = %range.end,
            days = range.days(),
            average,
            "Computed average miles per day"
        );
        average
    }

    /// Miles run on each day of the range
    #[must_use]
    pub fn miles_by_day(&self, range: &DateRange) -> Vec<DayMileage> {
        let series = miles_by_day(&self.runs, range.start, range.end);
        info!(
            start = %range.start,
            end = %range.end,
            days = series.len(),
            "Computed miles by day"
        );
        series
    }

    /// Trailing `window`-day mileage sums for each day of the range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `window` is zero or reaches back past the
    /// earliest supported date
    pub fn rolling_mileage(&self, range: &DateRange, window: u32) -> AppResult<Vec<DayMileage>> {
        let series = rolling_sum(&self.runs, range.start, range.end, window)?;
        info!(
            start = %range.start,
            end = %range.end,
            window,
            days = series.len(),
            "Computed rolling mileage"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_date_range_validation() {
        let range = DateRange::new(day(1), day(10)).unwrap();
        assert_eq!(range.start(), day(1));
        assert_eq!(range.end(), day(10));
        assert_eq!(range.days(), 10);

        let single = DateRange::new(day(3), day(3)).unwrap();
        assert_eq!(single.days(), 1);

        let err = DateRange::new(day(10), day(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_empty_service_zero_fills() {
        let service = MetricsService::default();
        let range = DateRange::new(day(1), day(7)).unwrap();
        let query = TrainingLoadQuery {
            range,
            max_hr: 190.0,
            resting_hr: 50.0,
            sex: Sex::Female,
        };

        let load = service.training_load(&query).unwrap();
        assert_eq!(load.len(), 7);
        assert!(load.iter().all(|d| d.training_load.atl == 0.0));

        assert!(service.total_seconds(&range).abs() < f64::EPSILON);
        assert_eq!(service.miles_by_day(&range).len(), 7);
    }
}
