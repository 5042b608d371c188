// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::duration::parse_duration;

/// Smoke tests for the pipeline dashboard
#[derive(Parser)]
#[command(name = "smoke")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SMOKE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a frontend project's configuration, sources and build
    Frontend(FrontendArgs),
    /// Run the builtin assertions with a simulated random failure
    Selftest(SelftestArgs),
}

#[derive(clap::Args)]
pub struct FrontendArgs {
    /// Frontend project directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Do not install or build; the build check passes as skipped
    #[arg(long)]
    pub skip_build: bool,

    /// Time limit for each install/build command (e.g. 90s, 5m)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub build_timeout: Option<Duration>,
}

#[derive(clap::Args)]
pub struct SelftestArgs {
    /// Probability of a simulated failure, between 0 and 1
    #[arg(long, value_name = "RATE")]
    pub fail_rate: Option<f64>,

    /// Seed the random draw for a reproducible run
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
