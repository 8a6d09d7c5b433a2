// ABOUTME: Training-load commands for runlog-cli
// ABOUTME: Resolves athlete physiology from flags or config and prints ATL/CTL/TSB or daily TRIMP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog::{
    config::environment::{AthleteDefaults, RunlogConfig},
    errors::AppResult,
    metrics::{MetricsService, TrainingLoadQuery},
};
use tracing::debug;

use crate::helpers::display::print_json;
use crate::LoadArgs;

/// Print daily ATL, CTL and TSB
pub fn training_load(service: &MetricsService, config: &RunlogConfig, args: &LoadArgs) -> AppResult<()> {
    let query = build_query(config, args)?;
    print_json(&service.training_load(&query)?)
}

/// Print daily TRIMP sums
pub fn daily_trimp(service: &MetricsService, config: &RunlogConfig, args: &LoadArgs) -> AppResult<()> {
    let query = build_query(config, args)?;
    print_json(&service.daily_trimp(&query)?)
}

/// Flags override the configured athlete defaults field by field
fn build_query(config: &RunlogConfig, args: &LoadArgs) -> AppResult<TrainingLoadQuery> {
    let athlete = AthleteDefaults {
        max_hr: args.max_hr.unwrap_or(config.athlete.max_hr),
        resting_hr: args.resting_hr.unwrap_or(config.athlete.resting_hr),
        sex: args.sex.unwrap_or(config.athlete.sex),
    };
    debug!(
        max_hr = athlete.max_hr,
        resting_hr = athlete.resting_hr,
        sex = %athlete.sex,
        "Resolved athlete physiology"
    );
    Ok(athlete.query(args.range.to_range()?))
}
