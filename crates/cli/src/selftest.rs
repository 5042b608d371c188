// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline assertion sequence with a simulated random failure.
//!
//! Unlike the frontend registry, the first failing assertion ends the run
//! immediately. After all assertions pass, a uniform draw decides whether
//! to inject a simulated failure.

use std::fmt::Debug;
use std::io::Write;

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::check::CheckError;
use crate::error::ExitCode;

/// Source of uniform deviates in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Thread-local RNG; a fresh draw every run.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Reproducible RNG for `--seed`.
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Equality assertion with expected-vs-actual framing.
pub fn assert_equal<T: PartialEq + Debug>(actual: T, expected: T) -> Result<(), CheckError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Assertion {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// One named assertion.
#[derive(Clone, Copy)]
pub struct Assertion {
    pub name: &'static str,
    pub check: fn() -> Result<(), CheckError>,
}

fn math() -> Result<(), CheckError> {
    assert_equal(2 + 2, 4)
}

fn string() -> Result<(), CheckError> {
    assert_equal("hello".to_uppercase().as_str(), "HELLO")
}

fn array() -> Result<(), CheckError> {
    let items = [1, 2, 3];
    assert_equal(items.len(), 3)
}

/// The builtin assertions, in execution order.
pub const STANDARD: &[Assertion] = &[
    Assertion {
        name: "Math",
        check: math,
    },
    Assertion {
        name: "String",
        check: string,
    },
    Assertion {
        name: "Array",
        check: array,
    },
];

/// Run `assertions` then the simulated-failure draw.
///
/// Progress goes to `out`, failures to `err`. Returns
/// [`ExitCode::CheckFailed`] at the first failure.
pub fn run(
    assertions: &[Assertion],
    fail_rate: f64,
    random: &mut dyn RandomSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<ExitCode> {
    writeln!(out, "Running tests...")?;

    for assertion in assertions {
        match (assertion.check)() {
            Ok(()) => writeln!(out, "✓ {} test passed", assertion.name)?,
            Err(e) => {
                writeln!(err, "✗ {} test failed: {}", assertion.name, e)?;
                return Ok(ExitCode::CheckFailed);
            }
        }
    }

    let draw = random.next_f64();
    tracing::debug!("simulated failure draw {draw:.4} (rate {fail_rate})");
    if draw < fail_rate {
        writeln!(err, "✗ {}", CheckError::Simulated)?;
        return Ok(ExitCode::CheckFailed);
    }

    writeln!(out, "All tests passed! ✅")?;
    writeln!(
        out,
        "Test run completed at: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    )?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "selftest_tests.rs"]
mod tests;
