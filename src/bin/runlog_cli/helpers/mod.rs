// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for runlog-cli
// ABOUTME: Provides argument conversion and JSON display utilities

pub mod display;
