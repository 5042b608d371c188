// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from flags, then environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for runner output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold banner and summary headings.
    pub fn heading() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red failing test name.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green passing test name.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Yellow cautionary message.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Dimmed informational note.
    pub fn note() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
