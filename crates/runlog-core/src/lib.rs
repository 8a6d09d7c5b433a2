// ABOUTME: Core types and constants for runlog running metrics
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog Core
//!
//! Foundation crate providing shared types and constants for the runlog
//! workspace. Everything here is plain data: the computation lives in
//! `runlog-intelligence` and the process wiring lives in the root crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Training-load lookbacks, Banister coefficients, units, env names
//! - **models**: Normalized run records and training-load output records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Run, Sex, `DayTrainingLoad`, etc.)
pub mod models;
