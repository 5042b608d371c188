// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration string parsing for subprocess time limits.
//!
//! Supports formats:
//! - `"30s"` → 30 seconds
//! - `"500ms"` → 500 milliseconds
//! - `"5m"` → 5 minutes
//! - `"1.5s"` → 1.5 seconds

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Milliseconds first (longer suffix)
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_millis(n));
    }

    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Duration::try_from_secs_f64(n).map_err(|_| format!("invalid duration: {s}"));
    }

    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        let secs = n
            .checked_mul(60)
            .ok_or_else(|| format!("duration too large: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }

    Err(format!(
        "invalid duration format: {s} (use 30s, 500ms, or 5m)"
    ))
}

/// Deserialize a duration string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
