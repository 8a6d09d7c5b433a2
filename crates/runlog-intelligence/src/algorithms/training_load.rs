// ABOUTME: One-pole exponential load filter producing ATL and CTL series
// ABOUTME: Seeds at zero and decays toward each day's TRIMP with alpha = 1 - e^(-1/tau)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::constants::training_load::{ATL_LOOKBACK_DAYS, CTL_LOOKBACK_DAYS};
use runlog_core::errors::{AppError, AppResult};

/// Acute and chronic load series over the same daily input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadSeries {
    /// ATL, 7-day time constant
    pub atl: Vec<f64>,
    /// CTL, 42-day time constant
    pub ctl: Vec<f64>,
}

/// Smoothing coefficient for a time constant of `tau` days
///
/// Formula: `α = 1 - e^(-1/τ)`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `tau` is zero.
pub fn smoothing_coefficient(tau: u32) -> AppResult<f64> {
    if tau == 0 {
        return Err(AppError::invalid_input(
            "Time constant must be a positive number of days, got 0",
        ));
    }
    Ok(alpha(tau))
}

fn alpha(tau: u32) -> f64 {
    1.0 - (-1.0 / f64::from(tau)).exp()
}

/// Apply the exponential load recurrence to a daily sequence
///
/// Formula: `load_t = load_{t-1} + α × (x_t - load_{t-1})`, with `load_{-1} = 0`
///
/// The output has one value per input value and each value depends only on
/// the inputs up to and including its own day.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `tau` is zero.
pub fn exponential_training_load(daily_values: &[f64], tau: u32) -> AppResult<Vec<f64>> {
    let alpha = smoothing_coefficient(tau)?;
    Ok(decay_series(daily_values, alpha))
}

fn decay_series(daily_values: &[f64], alpha: f64) -> Vec<f64> {
    daily_values
        .iter()
        .scan(0.0_f64, |load, &value| {
            *load += alpha * (value - *load);
            Some(*load)
        })
        .collect()
}

/// ATL and CTL over the same daily TRIMP sequence
#[must_use]
pub fn atl_ctl_series(daily_trimp: &[f64]) -> LoadSeries {
    LoadSeries {
        atl: decay_series(daily_trimp, alpha(ATL_LOOKBACK_DAYS)),
        ctl: decay_series(daily_trimp, alpha(CTL_LOOKBACK_DAYS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_is_alpha_times_input() {
        let loads = exponential_training_load(&[100.0, 50.0, 75.0, 0.0, 25.0], 7).unwrap();
        let alpha = smoothing_coefficient(7).unwrap();

        assert_eq!(loads.len(), 5);
        assert_eq!(loads[0], alpha * 100.0);
        assert!((loads[0] - 13.3).abs() < 1.0);
        assert!(loads.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_matches_standard_ema_form() {
        let inputs = [30.0, 0.0, 80.0, 45.5, 0.0, 0.0, 120.0];
        let alpha = smoothing_coefficient(42).unwrap();
        let loads = exponential_training_load(&inputs, 42).unwrap();

        let mut prev = 0.0;
        for (value, load) in inputs.iter().zip(&loads) {
            let expected = alpha.mul_add(*value, (1.0 - alpha) * prev);
            assert!((load - expected).abs() < 1e-12);
            prev = *load;
        }
    }

    #[test]
    fn test_zero_tau_is_rejected() {
        assert!(smoothing_coefficient(0).is_err());
        assert!(exponential_training_load(&[1.0], 0).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(exponential_training_load(&[], 7).unwrap().is_empty());
        assert_eq!(atl_ctl_series(&[]), LoadSeries::default());
    }

    #[test]
    fn test_spike_rises_then_decays() {
        let loads = exponential_training_load(&[0.0, 100.0, 0.0, 0.0, 0.0], 7).unwrap();
        assert_eq!(loads[0], 0.0);
        assert!(loads[1] > loads[0]);
        assert!(loads[2] < loads[1]);
        assert!(loads[3] < loads[2]);
        assert!(loads[4] < loads[3]);
    }

    #[test]
    fn test_atl_reacts_faster_than_ctl() {
        let series = atl_ctl_series(&[50.0, 60.0, 55.0, 70.0, 45.0, 65.0, 50.0]);
        assert_eq!(series.atl.len(), 7);
        assert_eq!(series.ctl.len(), 7);
        assert!(series.atl[6] > series.ctl[6]);
    }
}
