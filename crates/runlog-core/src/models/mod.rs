// ABOUTME: Core data models for runlog running metrics
// ABOUTME: Re-exports Run, Sex, and the training-load and mileage output records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Run`: one completed workout, normalized from either upstream platform
//! - `Sex`: the two categories of the Banister weighting model
//! - `DailyTrimp`, `TrainingLoad`, `DayTrainingLoad`: training-load outputs
//! - `DayMileage`: per-day distance outputs
//! - `RunSortBy`, `SortOrder`: ordering of run listings
//!
//! All of these are transient values built fresh per query.

mod mileage;
mod run;
mod sex;
mod sort;
mod training_load;

pub use mileage::DayMileage;
pub use run::{Run, RunSource, RunType};
pub use sex::Sex;
pub use sort::{RunSortBy, SortOrder};
pub use training_load::{DailyTrimp, DayTrainingLoad, TrainingLoad};
