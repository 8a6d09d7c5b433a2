// ABOUTME: Training-load output records: daily TRIMP and per-day ATL/CTL/TSB
// ABOUTME: TrainingLoad derives TSB from CTL and ATL at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summed TRIMP of all heart-rate-bearing runs on one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTrimp {
    /// Calendar day
    pub date: NaiveDate,
    /// TRIMP total, `0.0` on rest days
    pub trimp: f64,
}

/// Acute/chronic load pair with the derived stress balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrainingLoad {
    /// Acute Training Load (7-day time constant) - fatigue
    pub atl: f64,
    /// Chronic Training Load (42-day time constant) - fitness
    pub ctl: f64,
    /// Training Stress Balance, always `ctl - atl`
    pub tsb: f64,
}

impl TrainingLoad {
    /// Build a load value, deriving TSB as `ctl - atl`
    #[must_use]
    pub fn from_components(ctl: f64, atl: f64) -> Self {
        Self {
            atl,
            ctl,
            tsb: ctl - atl,
        }
    }

    /// Load of an athlete with no recorded training
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            atl: 0.0,
            ctl: 0.0,
            tsb: 0.0,
        }
    }
}

/// Training load on a single calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayTrainingLoad {
    /// Calendar day
    pub date: NaiveDate,
    /// ATL, CTL and TSB on that day
    pub training_load: TrainingLoad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsb_is_derived() {
        let load = TrainingLoad::from_components(42.5, 61.25);
        assert_eq!(load.tsb, 42.5 - 61.25);
        assert_eq!(load.ctl, 42.5);
        assert_eq!(load.atl, 61.25);
    }

    #[test]
    fn test_day_training_load_json_shape() {
        let day = DayTrainingLoad {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            training_load: TrainingLoad::zero(),
        };
        let json = serde_json::to_value(day).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["training_load"]["tsb"], 0.0);
    }
}
