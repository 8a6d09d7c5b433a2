// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates env var parsing, athlete defaults, and configuration error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runlog::config::environment::{Environment, RunlogConfig};
use runlog::errors::ErrorCode;
use runlog::logging::LogFormat;
use runlog::models::Sex;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const RUNLOG_VARS: [&str; 10] = [
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
    "RUNLOG_RUNS_FILE",
    "RUNLOG_MAX_HR",
    "RUNLOG_RESTING_HR",
    "RUNLOG_SEX",
];

/// Clears every variable the config reads so each test starts from defaults
fn clear_runlog_env() {
    for key in RUNLOG_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_runlog_env();

    let config = RunlogConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.environment, Environment::Development);
    assert!(!config.logging.include_location);
    assert_eq!(config.runs_file, None);
    assert!((config.athlete.max_hr - 192.0).abs() < f64::EPSILON);
    assert!((config.athlete.resting_hr - 42.0).abs() < f64::EPSILON);
    assert_eq!(config.athlete.sex, Sex::Male);
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_runlog_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");
    env::set_var("RUNLOG_RUNS_FILE", "/var/lib/runlog/runs.json");
    env::set_var("RUNLOG_MAX_HR", "185");
    env::set_var("RUNLOG_RESTING_HR", " 48.5 ");
    env::set_var("RUNLOG_SEX", "f");

    let config = RunlogConfig::from_env().unwrap();
    clear_runlog_env();

    assert!(config.environment.is_production());
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.runs_file,
        Some(PathBuf::from("/var/lib/runlog/runs.json"))
    );
    assert!((config.athlete.max_hr - 185.0).abs() < f64::EPSILON);
    assert!((config.athlete.resting_hr - 48.5).abs() < f64::EPSILON);
    assert_eq!(config.athlete.sex, Sex::Female);
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_heart_rate() {
    clear_runlog_env();
    env::set_var("RUNLOG_MAX_HR", "one-ninety");

    let err = RunlogConfig::from_env().unwrap_err();
    clear_runlog_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("RUNLOG_MAX_HR"));
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_sex() {
    clear_runlog_env();
    env::set_var("RUNLOG_SEX", "X");

    let err = RunlogConfig::from_env().unwrap_err();
    clear_runlog_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("RUNLOG_SEX"));
}

#[test]
#[serial]
fn test_from_env_rejects_resting_above_max() {
    clear_runlog_env();
    env::set_var("RUNLOG_MAX_HR", "120");
    env::set_var("RUNLOG_RESTING_HR", "130");

    let err = RunlogConfig::from_env().unwrap_err();
    clear_runlog_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_blank_runs_file_is_treated_as_unset() {
    clear_runlog_env();
    env::set_var("RUNLOG_RUNS_FILE", "   ");

    let config = RunlogConfig::from_env().unwrap();
    clear_runlog_env();

    assert_eq!(config.runs_file, None);
    assert_eq!(
        config.resolve_runs_file(None).unwrap_err().code,
        ErrorCode::ConfigMissing
    );
}

#[test]
#[serial]
fn test_logging_settings_come_from_the_same_load() {
    clear_runlog_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "warn,runlog=debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "runlog-nightly");

    let config = RunlogConfig::from_env().unwrap();
    clear_runlog_env();

    // Directive lists are carried through untouched
    assert_eq!(config.logging.level, "warn,runlog=debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.environment, config.environment);
    assert!(config.logging.include_location);
    assert!(config.logging.include_thread);
    assert_eq!(config.logging.service_name, "runlog-nightly");
    assert!(config.summary().contains("log_filter=warn,runlog=debug"));
}

#[test]
#[serial]
fn test_location_flag_outside_production() {
    clear_runlog_env();
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = RunlogConfig::from_env().unwrap();
    clear_runlog_env();

    assert!(config.logging.include_location);
    assert!(!config.logging.include_thread);
}

#[test]
fn test_environment_display_round_trips() {
    for environment in [
        Environment::Development,
        Environment::Production,
        Environment::Testing,
    ] {
        assert_eq!(
            Environment::from_str_or_default(&environment.to_string()),
            environment
        );
    }
}
