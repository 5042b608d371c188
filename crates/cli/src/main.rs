// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke CLI entry point.

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use smoke::cli::{Cli, Command};
use smoke::config::{self, Config};
use smoke::discovery;
use smoke::error::ExitCode;

mod cmd_frontend;
mod cmd_selftest;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SMOKE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("smoke: {}", e);
            match e.downcast_ref::<smoke::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Frontend(args)) => cmd_frontend::run(&cli, args),
        Some(Command::Selftest(args)) => cmd_selftest::run(&cli, args),
    }
}

/// Resolve and load the config for `root`, falling back to defaults.
fn load_config(cli: &Cli, root: &Path) -> anyhow::Result<Config> {
    match discovery::resolve_config(cli.config.as_deref(), root)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load_with_warnings(&path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}
