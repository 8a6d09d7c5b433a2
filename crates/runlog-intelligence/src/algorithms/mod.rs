// ABOUTME: Algorithm implementations for training-load analysis
// ABOUTME: Banister TRIMP scoring and the one-pole exponential load filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exponential moving-average filter behind ATL and CTL
pub mod training_load;

/// Banister Training Impulse scoring
pub mod trimp;

pub use training_load::{atl_ctl_series, exponential_training_load, smoothing_coefficient, LoadSeries};
pub use trimp::{relative_heart_rate, trimp, TrimpModel};
