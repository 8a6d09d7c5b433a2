// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for runlog-cli
// ABOUTME: Prints query results as pretty JSON on stdout

use runlog::errors::AppResult;
use runlog::metrics::DateRange;
use serde::Serialize;
use serde_json::{json, Value};

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print a single scalar metric together with the range it covers
pub fn print_scalar(range: &DateRange, name: &str, value: f64) -> AppResult<()> {
    let mut body = json!({
        "start": range.start(),
        "end": range.end(),
    });
    if let Value::Object(map) = &mut body {
        map.insert(name.to_owned(), json!(value));
    }
    print_json(&body)
}
