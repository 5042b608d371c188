// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selftest command implementation.

use smoke::cli::{Cli, SelftestArgs};
use smoke::error::{Error, ExitCode};
use smoke::selftest::{self, RandomSource, STANDARD, SeededRandom, ThreadRandom};

/// Run the selftest command.
pub fn run(cli: &Cli, args: &SelftestArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = crate::load_config(cli, &cwd)?.selftest;

    let fail_rate = args.fail_rate.unwrap_or(config.fail_rate);
    if !(0.0..=1.0).contains(&fail_rate) {
        return Err(Error::Argument(format!(
            "--fail-rate must be between 0 and 1 (got {fail_rate})"
        ))
        .into());
    }

    let mut random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = selftest::run(
        STANDARD,
        fail_rate,
        random.as_mut(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(code)
}
