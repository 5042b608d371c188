// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case and result types shared by the runner and output formatters.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Why a single check failed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A required file or directory is absent.
    #[error("{message}")]
    MissingResource { path: PathBuf, message: String },

    /// An expected marker, key or entry is absent from content.
    #[error("{message}")]
    ContentMismatch { marker: String, message: String },

    /// A file exists but could not be read or parsed.
    #[error("{message}")]
    InvalidContent { path: PathBuf, message: String },

    /// An external command failed, could not start, or timed out.
    #[error("{command}: {detail}")]
    Subprocess { command: String, detail: String },

    /// A failure wrapped with check-specific framing (e.g. "Build failed").
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CheckError>,
    },

    /// A value did not match its expectation.
    #[error("expected {expected}, got {actual}")]
    Assertion { expected: String, actual: String },

    /// Randomly injected failure with no underlying cause.
    #[error("Random test failure (simulated)")]
    Simulated,

    /// The check panicked and was caught by the runner.
    #[error("check panicked: {0}")]
    Panicked(String),
}

/// Stable category tag for a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingResource,
    ContentMismatch,
    InvalidContent,
    Subprocess,
    Assertion,
    Simulated,
    Panicked,
}

impl CheckError {
    pub fn missing(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MissingResource {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn mismatch(marker: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContentMismatch {
            marker: marker.into(),
            message: message.into(),
        }
    }

    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap this error with a prefix, keeping the underlying kind.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Category of the root cause (context wrappers are transparent).
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingResource { .. } => ErrorKind::MissingResource,
            Self::ContentMismatch { .. } => ErrorKind::ContentMismatch,
            Self::InvalidContent { .. } => ErrorKind::InvalidContent,
            Self::Subprocess { .. } => ErrorKind::Subprocess,
            Self::Context { source, .. } => source.kind(),
            Self::Assertion { .. } => ErrorKind::Assertion,
            Self::Simulated => ErrorKind::Simulated,
            Self::Panicked(_) => ErrorKind::Panicked,
        }
    }
}

/// Receives each note as soon as a check records it.
pub type NoteSink<'a> = dyn FnMut(&str) -> std::io::Result<()> + 'a;

/// Per-case scratch space handed to a running check.
///
/// Notes are informational lines ("Installing dependencies first...").
/// With a sink attached they are forwarded immediately, so they show up
/// before any slow work that follows them.
#[derive(Default)]
pub struct CaseContext<'a> {
    notes: Vec<String>,
    sink: Option<&'a mut NoteSink<'a>>,
    sink_error: Option<std::io::Error>,
}

impl<'a> CaseContext<'a> {
    /// Context that forwards every note to `sink` as it is added.
    pub fn streaming(sink: &'a mut NoteSink<'a>) -> Self {
        Self {
            notes: Vec::new(),
            sink: Some(sink),
            sink_error: None,
        }
    }

    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.sink_error.is_none()
            && let Some(sink) = self.sink.as_mut()
            && let Err(e) = (*sink)(&message)
        {
            self.sink_error = Some(e);
        }
        self.notes.push(message);
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Recorded notes, plus the first error the sink returned, if any.
    pub(crate) fn finish(self) -> (Vec<String>, Option<std::io::Error>) {
        (self.notes, self.sink_error)
    }
}

impl std::fmt::Debug for CaseContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseContext")
            .field("notes", &self.notes)
            .field("streaming", &self.sink.is_some())
            .finish()
    }
}

/// Boxed check procedure. Consumed exactly once by the runner.
pub type CheckFn = Box<dyn FnOnce(&mut CaseContext<'_>) -> Result<(), CheckError>>;

/// A named check waiting to be run.
pub struct TestCase {
    pub name: String,
    pub check: CheckFn,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: FnOnce(&mut CaseContext<'_>) -> Result<(), CheckError> + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Outcome of one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    pub duration_ms: u64,
}

impl CaseResult {
    pub fn passed(name: impl Into<String>, notes: Vec<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: true,
            kind: None,
            message: None,
            notes,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        error: &CheckError,
        notes: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            kind: Some(error.kind()),
            message: Some(error.to_string()),
            notes,
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// A `{name, message}` pair for the end-of-run error listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDetail {
    pub test: String,
    pub error: String,
}

/// Pass/fail counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Aggregated results of a full registry run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// RFC 3339 timestamp of when the run finished.
    pub timestamp: String,
    /// Whether every case passed.
    pub passed: bool,
    pub summary: Summary,
    pub tests: Vec<CaseResult>,
    #[serde(skip)]
    pub failures: Vec<FailureDetail>,
}

impl RunReport {
    pub fn new(timestamp: String, tests: Vec<CaseResult>) -> Self {
        let failures: Vec<FailureDetail> = tests
            .iter()
            .filter(|t| !t.passed)
            .map(|t| FailureDetail {
                test: t.name.clone(),
                error: t.message.clone().unwrap_or_default(),
            })
            .collect();
        let summary = Summary {
            passed: tests.len() - failures.len(),
            failed: failures.len(),
        };
        Self {
            timestamp,
            passed: summary.failed == 0,
            summary,
            tests,
            failures,
        }
    }

    pub fn exit_code(&self) -> crate::ExitCode {
        if self.summary.failed == 0 {
            crate::ExitCode::Success
        } else {
            crate::ExitCode::CheckFailed
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
