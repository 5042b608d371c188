// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential test registry with error isolation.
//!
//! Cases run in registration order. Each case runs inside a failure
//! boundary: an `Err` return or a panic is recorded as a failure and the
//! run continues with the next case.

use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};

use crate::check::{CaseContext, CaseResult, CheckError, RunReport, TestCase};

/// Receives progress events as the registry runs.
///
/// The text formatter streams these to the terminal; JSON output ignores
/// them and serializes the final [`RunReport`] instead.
pub trait RunObserver {
    /// Called once before the first case.
    fn on_start(&mut self, _total: usize) -> std::io::Result<()> {
        Ok(())
    }

    /// Called for each informational note, before the case's status.
    fn on_note(&mut self, _case: &str, _note: &str) -> std::io::Result<()> {
        Ok(())
    }

    /// Called after each case finishes.
    fn on_result(&mut self, _result: &CaseResult) -> std::io::Result<()> {
        Ok(())
    }

    /// Called once after the last case.
    fn on_finish(&mut self, _report: &RunReport) -> std::io::Result<()> {
        Ok(())
    }
}

/// Observer that discards every event.
pub struct Silent;

impl RunObserver for Silent {}

/// Ordered collection of named checks.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check. Names are not deduplicated.
    pub fn register<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: FnOnce(&mut CaseContext<'_>) -> Result<(), CheckError> + 'static,
    {
        self.cases.push(TestCase::new(name, check));
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Registered names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }

    /// Run every case once, in order, reporting through `observer`.
    pub fn run_all(self, observer: &mut dyn RunObserver) -> std::io::Result<RunReport> {
        observer.on_start(self.cases.len())?;

        let mut results = Vec::with_capacity(self.cases.len());
        for case in self.cases {
            let result = run_case(case, observer)?;
            observer.on_result(&result)?;
            results.push(result);
        }

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let report = RunReport::new(timestamp, results);
        observer.on_finish(&report)?;
        Ok(report)
    }
}

/// Run one case inside the failure boundary, streaming its notes to
/// `observer` as the check records them.
fn run_case(case: TestCase, observer: &mut dyn RunObserver) -> std::io::Result<CaseResult> {
    let TestCase { name, check } = case;
    tracing::debug!("running {}", name);

    let start = Instant::now();
    let mut emit = |note: &str| observer.on_note(&name, note);
    let mut ctx = CaseContext::streaming(&mut emit);
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check(&mut ctx)))
        .unwrap_or_else(|payload| Err(CheckError::Panicked(panic_message(payload.as_ref()))));
    let elapsed = start.elapsed();
    let (notes, sink_error) = ctx.finish();
    if let Some(e) = sink_error {
        return Err(e);
    }

    tracing::debug!(
        "finished {} in {}ms ({})",
        name,
        elapsed.as_millis(),
        if outcome.is_ok() { "pass" } else { "fail" }
    );
    Ok(finish_case(name, outcome, notes, elapsed))
}

fn finish_case(
    name: String,
    outcome: Result<(), CheckError>,
    notes: Vec<String>,
    elapsed: Duration,
) -> CaseResult {
    match outcome {
        Ok(()) => CaseResult::passed(name, notes, elapsed),
        Err(err) => CaseResult::failed(name, &err, notes, elapsed),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
