// ABOUTME: Time-on-feet command for runlog-cli
// ABOUTME: Prints total run duration in seconds over a date window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog::{errors::AppResult, metrics::MetricsService};

use crate::helpers::display::print_scalar;
use crate::RangeArgs;

/// Print total seconds run in the window
pub fn seconds(service: &MetricsService, args: &RangeArgs) -> AppResult<()> {
    let range = args.to_range()?;
    print_scalar(&range, "total_seconds", service.total_seconds(&range))
}
