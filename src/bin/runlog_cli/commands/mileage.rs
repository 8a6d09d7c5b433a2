// ABOUTME: Mileage commands for runlog-cli
// ABOUTME: Handles total, by-day, average-per-day and rolling mileage queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog::{errors::AppResult, metrics::MetricsService};

use crate::helpers::display::{print_json, print_scalar};
use crate::RangeArgs;

/// Print total miles in the window
pub fn total(service: &MetricsService, args: &RangeArgs) -> AppResult<()> {
    let range = args.to_range()?;
    print_scalar(&range, "total_mileage", service.total_mileage(&range))
}

/// Print miles for every day in the window
pub fn by_day(service: &MetricsService, args: &RangeArgs) -> AppResult<()> {
    let range = args.to_range()?;
    print_json(&service.miles_by_day(&range))
}

/// Print the average miles per calendar day
pub fn avg_per_day(service: &MetricsService, args: &RangeArgs) -> AppResult<()> {
    let range = args.to_range()?;
    print_scalar(&range, "avg_miles_per_day", service.avg_miles_per_day(&range))
}

/// Print trailing `window`-day sums for every day in the window
pub fn rolling(service: &MetricsService, args: &RangeArgs, window: u32) -> AppResult<()> {
    let range = args.to_range()?;
    print_json(&service.rolling_mileage(&range, window)?)
}
