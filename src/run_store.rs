// ABOUTME: Loads a run history from JSON text or a JSON file on disk
// ABOUTME: Maps missing files and malformed records onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Run history loading
//!
//! A run history is a JSON array of [`Run`] records whose dates are already
//! localized calendar days.

use crate::errors::{AppError, AppResult};
use crate::models::Run;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Parse a JSON array of runs
///
/// # Errors
///
/// Returns `SerializationError` carrying the parser message when the text is
/// not a valid run array
pub fn parse_runs(json: &str) -> AppResult<Vec<Run>> {
    let runs: Vec<Run> = serde_json::from_str(json)
        .map_err(|e| AppError::serialization(format!("Invalid run history: {e}")).with_source(e))?;
    debug!(runs = runs.len(), "Parsed run history");
    Ok(runs)
}

/// Read and parse a run history file
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, `StorageError`
/// for other read failures and `SerializationError` for malformed content
pub fn load_runs(path: impl AsRef<Path>) -> AppResult<Vec<Run>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Run history file {shown}"))
                .with_resource_id(shown.clone())
                .with_source(e)
        } else {
            AppError::storage(format!("Failed to read run history {shown}: {e}"))
                .with_resource_id(shown.clone())
                .with_source(e)
        }
    })?;

    let runs = parse_runs(&contents).map_err(|e| e.with_resource_id(shown.clone()))?;
    info!(path = %shown, runs = runs.len(), "Loaded run history");
    Ok(runs)
}
