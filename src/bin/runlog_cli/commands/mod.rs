// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for runlog-cli
// ABOUTME: Provides access to training load, duration, mileage and run listing commands

pub mod duration;
pub mod mileage;
pub mod runs;
pub mod training_load;
