// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for training load, units, and environment names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single file.

/// Banister TRIMP coefficients and ATL/CTL lookbacks
pub mod training_load;

/// Unit conversion constants
pub mod units {
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Decimal places kept on rolling mileage sums
    pub const MILEAGE_ROUNDING_DECIMALS: i32 = 4;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const RUNLOG: &str = "runlog";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Any value turns on source file and line numbers in log lines
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Any value turns on thread ids and names in log lines
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Service name reported in structured logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Path to the JSON run history used when `--runs` is absent
    pub const RUNS_FILE: &str = "RUNLOG_RUNS_FILE";
    /// Default athlete maximum heart rate
    pub const MAX_HR: &str = "RUNLOG_MAX_HR";
    /// Default athlete resting heart rate
    pub const RESTING_HR: &str = "RUNLOG_RESTING_HR";
    /// Default athlete sex for the Banister weighting (`M` or `F`)
    pub const SEX: &str = "RUNLOG_SEX";
}

/// Fallback values for settings the environment or a query leaves unset
pub mod defaults {
    /// Maximum heart rate in bpm
    pub const MAX_HR: f64 = 192.0;
    /// Resting heart rate in bpm
    pub const RESTING_HR: f64 = 42.0;
    /// Sex code for the Banister weighting
    pub const SEX: &str = "M";
    /// Log filter used when `RUST_LOG` is unset
    pub const LOG_FILTER: &str = "info";
}
