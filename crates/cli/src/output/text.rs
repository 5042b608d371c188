// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Streams one line per event:
//! ```text
//! 🧪 Running Frontend Tests for CI/CD Dashboard
//! ==================================================
//! ✅ <name>
//!    📦 <note>
//! ❌ <name>: <message>
//!
//! ==================================================
//! 📊 Test Results: <passed> passed, <failed> failed
//!
//! 🔍 Error Details:
//!    <name>: <message>
//!
//! ⚠️  Some tests failed. Please check the configuration.
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CaseResult, RunReport};
use crate::color::scheme;
use crate::runner::RunObserver;

/// Width of the `=` rule under the banner and above the summary.
const RULE_WIDTH: usize = 50;

/// Streaming text formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    out: W,
    title: String,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, title: impl Into<String>) -> Self {
        Self::new(StandardStream::stdout(color_choice), title)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }
}

impl<W: WriteColor> RunObserver for TextFormatter<W> {
    fn on_start(&mut self, _total: usize) -> std::io::Result<()> {
        self.out.set_color(&scheme::heading())?;
        write!(self.out, "🧪 {}", self.title)?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.rule()
    }

    fn on_note(&mut self, _case: &str, note: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::note())?;
        write!(self.out, "   📦 {note}")?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn on_result(&mut self, result: &CaseResult) -> std::io::Result<()> {
        if result.passed {
            write!(self.out, "✅ ")?;
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "{}", result.name)?;
            self.out.reset()?;
            writeln!(self.out)
        } else {
            write!(self.out, "❌ ")?;
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "{}", result.name)?;
            self.out.reset()?;
            writeln!(
                self.out,
                ": {}",
                result.message.as_deref().unwrap_or_default()
            )
        }
    }

    fn on_finish(&mut self, report: &RunReport) -> std::io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(
            self.out,
            "📊 Test Results: {} passed, {} failed",
            report.summary.passed, report.summary.failed
        )?;

        if !report.failures.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "🔍 Error Details:")?;
            for failure in &report.failures {
                writeln!(self.out, "   {}: {}", failure.test, failure.error)?;
            }
        }

        writeln!(self.out)?;
        if report.summary.failed == 0 {
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "🎉 All frontend tests passed! Ready to run.")?;
        } else {
            self.out.set_color(&scheme::warn())?;
            write!(
                self.out,
                "⚠️  Some tests failed. Please check the configuration."
            )?;
        }
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
