// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written once at the end (not streamed).

use std::io::Write;

use crate::check::RunReport;

/// Formatter that writes the final report as a single JSON document.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write(&mut self, report: &RunReport) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
