// ABOUTME: Run listing command for runlog-cli
// ABOUTME: Prints the runs in a window ordered by the requested field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog::{
    errors::AppResult,
    metrics::MetricsService,
    models::{RunSortBy, SortOrder},
};

use crate::helpers::display::print_json;
use crate::RangeArgs;

/// Print the runs in the window, sorted
pub fn list(
    service: &MetricsService,
    args: &RangeArgs,
    sort_by: RunSortBy,
    order: SortOrder,
) -> AppResult<()> {
    let range = args.to_range()?;
    print_json(&service.list_runs(&range, sort_by, order))
}
