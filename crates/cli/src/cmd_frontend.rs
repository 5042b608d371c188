// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frontend command implementation.

use std::rc::Rc;

use smoke::checks::{self, FrontendOptions};
use smoke::cli::{Cli, FrontendArgs, OutputFormat};
use smoke::color::resolve_color;
use smoke::error::{Error, ExitCode};
use smoke::output::{JsonFormatter, TextFormatter};
use smoke::process::SystemRunner;
use smoke::runner::Silent;

const TITLE: &str = "Running Frontend Tests for CI/CD Dashboard";

/// Run the frontend command.
pub fn run(cli: &Cli, args: &FrontendArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    if !root.is_dir() {
        return Err(Error::Argument(format!("not a directory: {}", root.display())).into());
    }

    let mut config = crate::load_config(cli, &root)?.frontend;
    if let Some(timeout) = args.build_timeout {
        config.build_timeout = timeout;
    }
    tracing::debug!(
        "checking {} (build timeout {:?})",
        root.display(),
        config.build_timeout
    );

    let runner = Rc::new(SystemRunner::new(Some(config.build_timeout)));
    let options = FrontendOptions {
        skip_build: args.skip_build,
    };
    let registry = checks::frontend_suite(&root, &config, runner, options);

    let report = match args.output {
        OutputFormat::Text => {
            let color = resolve_color(args.color, args.no_color);
            let mut formatter = TextFormatter::stdout(color, TITLE);
            registry.run_all(&mut formatter)?
        }
        OutputFormat::Json => {
            let report = registry.run_all(&mut Silent)?;
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
            report
        }
    };

    Ok(report.exit_code())
}
