// ABOUTME: Running metrics engine: TRIMP scoring, ATL/CTL/TSB, mileage aggregation and run listings
// ABOUTME: Pure functions over already-loaded, already-localized run records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog Intelligence
//!
//! Every function in this crate takes immutable inputs and returns freshly
//! built outputs, so callers may invoke them concurrently without locking.
//!
//! - [`algorithms`]: the Banister TRIMP scorer and the exponential load filter
//! - [`training_load`]: daily TRIMP aggregation and the ATL/CTL/TSB pipeline
//! - [`mileage`]: distance totals, averages and rolling sums
//! - [`duration`]: time-on-feet totals
//! - [`listing`]: date-filtered, sorted run listings

/// TRIMP scoring and exponential smoothing primitives
pub mod algorithms;

/// Time-on-feet aggregation
pub mod duration;

/// Sorted run listings
pub mod listing;

/// Distance aggregation
pub mod mileage;

/// Daily TRIMP aggregation and the training-load pipeline
pub mod training_load;

pub use algorithms::{exponential_training_load, trimp, TrimpModel};
pub use duration::total_seconds;
pub use listing::list_runs;
pub use mileage::{avg_miles_per_day, miles_by_day, rolling_sum, total_mileage};
pub use training_load::{compute_daily_trimp, compute_training_load};
