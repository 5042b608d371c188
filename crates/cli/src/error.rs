// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Harness-level errors.
///
/// Failures of individual checks are [`crate::check::CheckError`]; these are
/// the errors that stop the harness before or after the checks run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using smoke Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// One or more checks failed
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
