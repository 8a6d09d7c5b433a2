// ABOUTME: Environment configuration management for runlog deployments
// ABOUTME: Parses deployment mode, logging, run history path and athlete defaults from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config, service_names};
use crate::errors::{AppError, AppResult};
use crate::logging::{LogFormat, LoggingConfig};
use crate::metrics::{DateRange, TrainingLoadQuery};
use crate::models::Sex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Athlete physiology used when a query does not carry its own values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteDefaults {
    /// Maximum heart rate in bpm
    pub max_hr: f64,
    /// Resting heart rate in bpm
    pub resting_hr: f64,
    /// Sex used for the Banister weighting
    pub sex: Sex,
}

impl Default for AthleteDefaults {
    fn default() -> Self {
        Self {
            max_hr: defaults::MAX_HR,
            resting_hr: defaults::RESTING_HR,
            sex: Sex::Male,
        }
    }
}

impl AthleteDefaults {
    /// Build a training-load query over `range` with these physiology values
    #[must_use]
    pub const fn query(&self, range: DateRange) -> TrainingLoadQuery {
        TrainingLoadQuery {
            range,
            max_hr: self.max_hr,
            resting_hr: self.resting_hr,
            sex: self.sex,
        }
    }
}

/// Complete runlog configuration
#[derive(Debug, Clone, Default)]
pub struct RunlogConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging settings handed to [`LoggingConfig::init`]
    pub logging: LoggingConfig,
    /// Default run history file, used when the CLI gets no `--runs`
    pub runs_file: Option<PathBuf>,
    /// Default athlete physiology
    pub athlete: AthleteDefaults,
}

impl RunlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a numeric or sex variable cannot be parsed,
    /// or when the resulting athlete defaults fail [`Self::validate`]
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let sex_code = env_var_or(env_config::SEX, defaults::SEX);
        let sex = sex_code.parse::<Sex>().map_err(|e| {
            AppError::config_invalid(format!("Invalid {}: {}", env_config::SEX, e.message))
        })?;

        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));

        let config = Self {
            environment,
            logging: logging_from_env(environment),
            runs_file: env::var(env_config::RUNS_FILE)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            athlete: AthleteDefaults {
                max_hr: parse_f64_var(env_config::MAX_HR, defaults::MAX_HR)?,
                resting_hr: parse_f64_var(env_config::RESTING_HR, defaults::RESTING_HR)?,
                sex,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the athlete heart rates are not finite or
    /// the maximum does not exceed the resting value
    pub fn validate(&self) -> AppResult<()> {
        let AthleteDefaults {
            max_hr, resting_hr, ..
        } = self.athlete;

        if !max_hr.is_finite() || !resting_hr.is_finite() {
            return Err(AppError::config_invalid(format!(
                "{} and {} must be finite numbers",
                env_config::MAX_HR,
                env_config::RESTING_HR
            )));
        }

        if max_hr <= resting_hr {
            return Err(AppError::config_invalid(format!(
                "{}={max_hr} must be greater than {}={resting_hr}",
                env_config::MAX_HR,
                env_config::RESTING_HR
            )));
        }

        Ok(())
    }

    /// Resolve the run history path: an explicit path wins over `RUNLOG_RUNS_FILE`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when neither source names a file
    pub fn resolve_runs_file(&self, explicit: Option<&Path>) -> AppResult<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.runs_file.clone())
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "No run history file given: pass --runs or set {}",
                    env_config::RUNS_FILE
                ))
            })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "runlog configuration: environment={}, log_filter={}, log_format={:?}, runs_file={}, max_hr={}, resting_hr={}, sex={}",
            self.environment,
            self.logging.level,
            self.logging.format,
            self.runs_file
                .as_deref()
                .map_or_else(|| "<unset>".to_owned(), |path| path.display().to_string()),
            self.athlete.max_hr,
            self.athlete.resting_hr,
            self.athlete.sex,
        )
    }
}

/// Logging settings from `RUST_LOG`, `LOG_FORMAT` and the location/thread flags
///
/// Production always includes source locations and thread information.
fn logging_from_env(environment: Environment) -> LoggingConfig {
    let detailed = environment.is_production();
    LoggingConfig {
        level: env_var_or(env_config::RUST_LOG, defaults::LOG_FILTER),
        format: env::var(env_config::LOG_FORMAT)
            .map_or(LogFormat::Compact, |value| LogFormat::from_str_or_default(&value)),
        include_location: detailed || env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
        include_thread: detailed || env::var(env_config::LOG_INCLUDE_THREAD).is_ok(),
        service_name: env_var_or(env_config::SERVICE_NAME, service_names::RUNLOG),
        service_version: env!("CARGO_PKG_VERSION").to_owned(),
        environment,
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a floating-point environment variable, using `default` when unset
fn parse_f64_var(key: &str, default: f64) -> AppResult<f64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}
