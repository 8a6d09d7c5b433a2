// ABOUTME: Closed two-way category selecting the Banister weighting coefficients
// ABOUTME: Parses strictly from "M"/"F" and rejects anything else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::training_load::{
    FEMALE_BASE_COEFFICIENT, FEMALE_EXPONENT_MULTIPLIER, MALE_BASE_COEFFICIENT,
    MALE_EXPONENT_MULTIPLIER,
};
use crate::errors::AppError;

/// Sex category for the Banister TRIMP weighting factor
///
/// `y = base_coefficient * exp(exponent_multiplier * hr_relative)`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male weighting: `0.64 * e^(1.92 x)`
    #[serde(rename = "M")]
    Male,
    /// Female weighting: `0.86 * e^(1.67 x)`
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Base coefficient of the weighting factor
    #[must_use]
    pub const fn base_coefficient(self) -> f64 {
        match self {
            Self::Male => MALE_BASE_COEFFICIENT,
            Self::Female => FEMALE_BASE_COEFFICIENT,
        }
    }

    /// Multiplier applied to relative heart rate inside the exponent
    #[must_use]
    pub const fn exponent_multiplier(self) -> f64 {
        match self {
            Self::Male => MALE_EXPONENT_MULTIPLIER,
            Self::Female => FEMALE_EXPONENT_MULTIPLIER,
        }
    }

    /// Single-letter code used on the wire
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: M, F"
            ))),
        }
    }
}
