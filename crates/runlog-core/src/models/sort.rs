// ABOUTME: Sort keys and directions for listing runs
// ABOUTME: Parses the lowercase names used by the CLI and serialized queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Field a run listing is ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunSortBy {
    /// Calendar date
    #[default]
    Date,
    /// Distance in miles
    Distance,
    /// Elapsed seconds
    Duration,
    /// Minutes per mile; zero-distance runs sort as slowest
    Pace,
    /// Average heart rate; runs without one sort as zero
    HeartRate,
    /// Upstream platform name
    Source,
    /// Run type name
    Type,
    /// Shoe name; runs without one sort as the empty name
    Shoes,
}

impl RunSortBy {
    /// Every sort key, in the order they are documented
    pub const ALL: [Self; 8] = [
        Self::Date,
        Self::Distance,
        Self::Duration,
        Self::Pace,
        Self::HeartRate,
        Self::Source,
        Self::Type,
        Self::Shoes,
    ];

    /// Name accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Pace => "pace",
            Self::HeartRate => "heart_rate",
            Self::Source => "source",
            Self::Type => "type",
            Self::Shoes => "shoes",
        }
    }
}

impl fmt::Display for RunSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunSortBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown sort field: '{}'. Valid options: date, distance, duration, pace, heart_rate, source, type, shoes",
                    s.trim()
                ))
            })
    }
}

/// Direction of a run listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    Asc,
    /// Largest first
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::invalid_input(format!(
                "Unknown sort order: '{other}'. Valid options: asc, desc"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_parsing() {
        assert_eq!("date".parse::<RunSortBy>().unwrap(), RunSortBy::Date);
        assert_eq!("heart-rate".parse::<RunSortBy>().unwrap(), RunSortBy::HeartRate);
        assert_eq!(" Pace ".parse::<RunSortBy>().unwrap(), RunSortBy::Pace);
        assert!("cadence".parse::<RunSortBy>().is_err());

        for key in RunSortBy::ALL {
            assert_eq!(key.to_string().parse::<RunSortBy>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn test_serde_names_match_parser() {
        let json = serde_json::to_string(&RunSortBy::HeartRate).unwrap();
        assert_eq!(json, "\"heart_rate\"");
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }
}
