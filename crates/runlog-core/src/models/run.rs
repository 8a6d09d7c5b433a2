// ABOUTME: Normalized run record shared by every aggregation
// ABOUTME: Run, RunType and RunSource definitions with serde wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::units::SECONDS_PER_MINUTE;

/// Kind of run, independent of the platform it was recorded on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RunType {
    /// Run outside on real terrain
    #[serde(rename = "Outdoor Run")]
    OutdoorRun,
    /// Run on a treadmill
    #[serde(rename = "Treadmill Run")]
    TreadmillRun,
}

impl RunType {
    /// Wire name, e.g. `"Outdoor Run"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutdoorRun => "Outdoor Run",
            Self::TreadmillRun => "Treadmill Run",
        }
    }
}

/// Platform a run was imported from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RunSource {
    /// Manual-log export
    MapMyFitness,
    /// GPS-tracking API
    Strava,
}

impl RunSource {
    /// Wire name, e.g. `"Strava"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MapMyFitness => "MapMyFitness",
            Self::Strava => "Strava",
        }
    }
}

/// A single completed run
///
/// `date` is the calendar date in the athlete's zone; localization happens
/// before a run reaches this crate.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use runlog_core::models::{Run, RunSource, RunType};
///
/// let run = Run {
///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     run_type: RunType::OutdoorRun,
///     distance: 5.0,
///     duration: 2_400.0,
///     source: RunSource::Strava,
///     avg_heart_rate: Some(150.0),
///     shoes: None,
/// };
/// assert!(run.has_heart_rate());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Run {
    /// Localized calendar date of the run
    pub date: NaiveDate,
    /// Outdoor or treadmill
    #[serde(rename = "type")]
    pub run_type: RunType,
    /// Distance in miles
    pub distance: f64,
    /// Elapsed time in seconds
    pub duration: f64,
    /// Upstream platform
    pub source: RunSource,
    /// Average heart rate in bpm, absent when no monitor was worn
    #[serde(default)]
    pub avg_heart_rate: Option<f64>,
    /// Shoe name, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<String>,
}

impl Run {
    /// Whether this run can contribute a TRIMP score
    #[must_use]
    pub const fn has_heart_rate(&self) -> bool {
        self.avg_heart_rate.is_some()
    }

    /// Minutes per mile, `None` for a zero-distance run
    #[must_use]
    pub fn pace(&self) -> Option<f64> {
        (self.distance > 0.0).then_some(self.duration / SECONDS_PER_MINUTE / self.distance)
    }

    /// Whether the run falls on a day inside `[start, end]`
    #[must_use]
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_wire_format() {
        let json = r#"{
            "date": "2024-01-15",
            "type": "Treadmill Run",
            "distance": 3.1,
            "duration": 1800,
            "source": "MapMyFitness"
        }"#;

        let run: Run = serde_json::from_str(json).unwrap();
        assert_eq!(run.run_type, RunType::TreadmillRun);
        assert_eq!(run.source, RunSource::MapMyFitness);
        assert!(run.avg_heart_rate.is_none());
        assert!(!run.has_heart_rate());

        let back = serde_json::to_value(&run).unwrap();
        assert_eq!(back["type"], "Treadmill Run");
        assert!(back.get("shoes").is_none());
    }

    #[test]
    fn test_is_within_is_inclusive() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let run = Run {
            date: day(15),
            run_type: RunType::OutdoorRun,
            distance: 4.0,
            duration: 2_000.0,
            source: RunSource::Strava,
            avg_heart_rate: None,
            shoes: Some("Pegasus 40".into()),
        };

        assert!(run.is_within(day(15), day(15)));
        assert!(run.is_within(day(14), day(16)));
        assert!(!run.is_within(day(16), day(20)));
    }

    #[test]
    fn test_pace_and_wire_names() {
        let mut run = Run {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            run_type: RunType::TreadmillRun,
            distance: 4.0,
            duration: 2_400.0,
            source: RunSource::MapMyFitness,
            avg_heart_rate: None,
            shoes: None,
        };
        assert_eq!(run.pace(), Some(10.0));
        run.distance = 0.0;
        assert_eq!(run.pace(), None);

        // as_str must agree with the serde names
        let back = serde_json::to_value(&run).unwrap();
        assert_eq!(back["type"], run.run_type.as_str());
        assert_eq!(back["source"], run.source.as_str());
    }
}
