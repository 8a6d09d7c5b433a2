// ABOUTME: Banister TRIMP coefficients and exponential load lookback windows
// ABOUTME: Fixed model constants, intentionally not configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// ATL (Acute Training Load) time constant in days - short-term fatigue
pub const ATL_LOOKBACK_DAYS: u32 = 7;

/// CTL (Chronic Training Load) time constant in days - long-term fitness
pub const CTL_LOOKBACK_DAYS: u32 = 42;

/// Banister male weighting base coefficient
pub const MALE_BASE_COEFFICIENT: f64 = 0.64;

/// Banister male weighting exponent multiplier
pub const MALE_EXPONENT_MULTIPLIER: f64 = 1.92;

/// Banister female weighting base coefficient
pub const FEMALE_BASE_COEFFICIENT: f64 = 0.86;

/// Banister female weighting exponent multiplier
pub const FEMALE_EXPONENT_MULTIPLIER: f64 = 1.67;
