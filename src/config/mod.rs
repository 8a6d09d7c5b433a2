// ABOUTME: Configuration management module for runlog settings
// ABOUTME: Environment-only configuration: deployment mode, logging, athlete defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for runlog
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file). There are no configuration files.

/// Environment-based configuration
pub mod environment;

pub use environment::{AthleteDefaults, Environment, RunlogConfig};
