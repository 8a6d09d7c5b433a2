// ABOUTME: Training Impulse (TRIMP) calculation using the Banister model
// ABOUTME: Sex-specific exponential weighting over clamped heart-rate reserve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::constants::units::SECONDS_PER_MINUTE;
use runlog_core::errors::{AppError, AppResult};
use runlog_core::models::{Run, Sex};

/// Banister TRIMP scorer bound to one athlete's physiology
///
/// Formula: `duration_minutes × hr_relative × base × exp(multiplier × hr_relative)`
///
/// Where `hr_relative = (avg_hr - resting_hr) / (max_hr - resting_hr)`, clamped to `[0, 1]`,
/// and `(base, multiplier)` is `(0.64, 1.92)` for [`Sex::Male`] and `(0.86, 1.67)`
/// for [`Sex::Female`].
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimpModel {
    max_hr: f64,
    resting_hr: f64,
    sex: Sex,
}

impl TrimpModel {
    /// Build a scorer after validating the heart-rate parameters
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either heart rate is not finite or if
    /// `max_hr` is not strictly greater than `resting_hr`.
    pub fn new(max_hr: f64, resting_hr: f64, sex: Sex) -> AppResult<Self> {
        if !max_hr.is_finite() || !resting_hr.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Heart rates must be finite numbers, got max_hr={max_hr}, resting_hr={resting_hr}"
            )));
        }
        if max_hr <= resting_hr {
            return Err(AppError::invalid_input(format!(
                "Maximum heart rate ({max_hr}) must be greater than resting heart rate ({resting_hr})"
            )));
        }
        Ok(Self {
            max_hr,
            resting_hr,
            sex,
        })
    }

    /// Maximum heart rate in bpm
    #[must_use]
    pub const fn max_hr(&self) -> f64 {
        self.max_hr
    }

    /// Resting heart rate in bpm
    #[must_use]
    pub const fn resting_hr(&self) -> f64 {
        self.resting_hr
    }

    /// Sex category selecting the weighting coefficients
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Score a run
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the run has no average heart rate.
    /// Callers aggregating many runs should skip those runs instead.
    pub fn score(&self, run: &Run) -> AppResult<f64> {
        let avg_hr = run.avg_heart_rate.ok_or_else(|| {
            AppError::invalid_input("Run must have an average heart rate to calculate TRIMP")
        })?;
        Ok(self.score_heart_rate(avg_hr, run.duration))
    }

    /// Score an average heart rate held for `duration_seconds`
    #[must_use]
    pub fn score_heart_rate(&self, avg_hr: f64, duration_seconds: f64) -> f64 {
        let hr_relative = relative_heart_rate(avg_hr, self.max_hr, self.resting_hr);
        let weighting =
            self.sex.base_coefficient() * (self.sex.exponent_multiplier() * hr_relative).exp();
        let duration_minutes = duration_seconds / SECONDS_PER_MINUTE;

        duration_minutes * hr_relative * weighting
    }
}

/// Heart rate as a fraction of the reserve between resting and maximum, clamped to `[0, 1]`
///
/// Readings below resting or above maximum (sensor noise, a stale `max_hr`)
/// pin to the bounds instead of producing negative or super-maximal intensity.
#[must_use]
pub fn relative_heart_rate(avg_hr: f64, max_hr: f64, resting_hr: f64) -> f64 {
    ((avg_hr - resting_hr) / (max_hr - resting_hr)).clamp(0.0, 1.0)
}

/// Calculate the Banister TRIMP score of a single run
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the run has no average heart rate or the
/// heart-rate parameters are unusable (see [`TrimpModel::new`]).
pub fn trimp(run: &Run, max_hr: f64, resting_hr: f64, sex: Sex) -> AppResult<f64> {
    TrimpModel::new(max_hr, resting_hr, sex)?.score(run)
}
