// ABOUTME: Per-day mileage record returned by the distance aggregations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Miles attributed to one calendar day (a single day or a rolling window ending on it)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayMileage {
    /// Calendar day
    pub date: NaiveDate,
    /// Distance in miles
    pub mileage: f64,
}
