// ABOUTME: Unified error type and error codes with their HTTP status mapping
// ABOUTME: Every fallible runlog operation returns AppResult<T>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines the standard error codes and the `AppError` type shared by the
//! computation crate, the run store, configuration loading and the CLI.
//! Error codes carry their HTTP status so a web layer can map them directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Required configuration value is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading or writing local storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,

            Self::ResourceNotFound => 404,

            Self::InternalError
            | Self::StorageError
            | Self::SerializationError
            | Self::ConfigMissing
            | Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Resource ID if applicable (file path, query name)
    pub resource_id: Option<String>,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Required configuration value missing
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Configuration value present but unusable
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::invalid_input("bad sex").with_resource_id("training-load");

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.resource_id.as_deref(), Some("training-load"));
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: bad sex"
        );
    }

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ConfigMissing).unwrap();
        assert_eq!(json, "\"CONFIG_MISSING\"");
    }

    #[test]
    fn test_json_error_is_serialization_error() {
        let parse = serde_json::from_str::<Vec<u32>>("[1, 2,").unwrap_err();
        let error = AppError::from(parse);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(std::error::Error::source(&error).is_some());
    }
}
