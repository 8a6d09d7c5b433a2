// ABOUTME: Logging configuration and structured logging setup for the runlog tools
// ABOUTME: Configures log levels, formatters, and the stderr output destination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Output always goes to stderr: the CLI prints its results as JSON on
//! stdout and that stream has to stay machine-readable. The settings are
//! read once by [`RunlogConfig::from_env`](crate::config::RunlogConfig::from_env)
//! and handed over as its `logging` field.

use crate::config::environment::Environment;
use crate::constants::{defaults, service_names};
use crate::errors::{AppError, AppResult};
use serde_json::json;
use std::io;
use tracing::info;
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter: a bare level (trace, debug, info, warn, error) or a directive list
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to [`LogFormat::Pretty`]
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_FILTER.into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::RUNLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Override the level, used by the CLI `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter from the configured level or directive list
    ///
    /// A bare level also gets a `runlog=<level>` directive. Directive lists
    /// such as `warn,runlog=debug` are used exactly as written.
    fn env_filter(&self) -> EnvFilter {
        let level = self.level.trim();
        let filter = EnvFilter::new(level);
        if level.parse::<LevelFilter>().is_err() {
            return filter;
        }
        match format!("runlog={level}").parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()
            }
        };

        installed.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "runlog starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        tracing::debug!("Logging configured: {}", config_summary);
    }
}
