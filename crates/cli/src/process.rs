// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution with captured output and a bounded wait.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};

use crate::check::CheckError;

/// Captured result of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output text to embed in a failure message.
    ///
    /// Prefers stderr; falls back to stdout, then the exit code.
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs external commands on behalf of a check.
pub trait CommandRunner {
    /// Run `argv` in `dir` and wait for it to exit.
    ///
    /// Returns `Err` only if the command could not be run to completion
    /// (spawn failure, timeout). A non-zero exit is `Ok` with
    /// `success == false`.
    fn run(&self, argv: &[String], dir: &Path) -> io::Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], dir: &Path) -> io::Result<CommandOutput> {
        let Some((program, args)) = argv.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command"));
        };

        tracing::debug!("running `{}` in {}", argv.join(" "), dir.display());
        let child = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let output = run_with_timeout(child, self.timeout)?;
        tracing::debug!("`{}` exited with {}", argv.join(" "), output.status);
        Ok(output.into())
    }
}

/// Run `argv` and turn anything but a clean exit into a [`CheckError`].
pub fn run_checked(
    runner: &dyn CommandRunner,
    argv: &[String],
    dir: &Path,
) -> Result<CommandOutput, CheckError> {
    let command = argv.join(" ");
    let output = runner
        .run(argv, dir)
        .map_err(|e| CheckError::Subprocess {
            command: command.clone(),
            detail: e.to_string(),
        })?;
    if output.success {
        Ok(output)
    } else {
        Err(CheckError::Subprocess {
            command,
            detail: output.failure_detail(),
        })
    }
}

/// Wait for a child process, killing it if `timeout` elapses.
///
/// If timeout is None, waits indefinitely. Output pipes are drained on
/// background threads so a chatty child cannot block on a full pipe.
pub fn run_with_timeout(mut child: Child, timeout: Option<Duration>) -> io::Result<Output> {
    let Some(limit) = timeout else {
        return child.wait_with_output();
    };

    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if start.elapsed() > limit => {
                child.kill().ok();
                child.wait().ok();
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("timed out after {}s", limit.as_secs_f64()),
                ));
            }
            None => std::thread::sleep(poll_interval),
        }
    };

    Ok(Output {
        status,
        stdout: stdout.map(join_drain).unwrap_or_default(),
        stderr: stderr.map(join_drain).unwrap_or_default(),
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> std::thread::JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).ok();
        buf
    })
}

fn join_drain(handle: std::thread::JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
