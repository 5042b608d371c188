//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing smoke CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::Path;
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the smoke binary
pub fn smoke_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smoke"));
    cmd.env_remove("SMOKE_LOG").env_remove("SMOKE_CONFIG");
    cmd
}

/// Create a builder for the frontend command
pub fn frontend() -> RunBuilder<Text> {
    RunBuilder::new("frontend")
}

/// Create a builder for the selftest command
pub fn selftest() -> RunBuilder<Text> {
    RunBuilder::new("selftest")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Fluent command builder
pub struct RunBuilder<Mode = Text> {
    subcommand: &'static str,
    dir: Option<std::path::PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl<Mode: 'static> RunBuilder<Mode> {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Switch to JSON output
    pub fn json(self) -> RunBuilder<Json> {
        RunBuilder {
            subcommand: self.subcommand,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = smoke_cmd();
        cmd.arg(self.subcommand);

        if is_json {
            cmd.args(["-o", "json"]);
        }

        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

#[allow(dead_code)]
impl RunBuilder<Text> {
    /// Run and assert exit code 0
    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    /// Run and assert exit code 1
    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    /// Run and assert a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl RunBuilder<Json> {
    /// Run, assert exit code 0, and parse the report
    pub fn passes(self) -> ReportJson {
        ReportJson::new(&run_exits(self.command(), 0).output.stdout)
    }

    /// Run, assert exit code 1, and parse the report
    pub fn fails(self) -> ReportJson {
        ReportJson::new(&run_exits(self.command(), 1).output.stdout)
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Parsed JSON run report
pub struct ReportJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ReportJson {
    fn new(stdout: &[u8]) -> Self {
        let root = serde_json::from_slice(stdout).expect("valid JSON");
        Self { root }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    pub fn tests(&self) -> &Vec<serde_json::Value> {
        self.root["tests"].as_array().expect("tests array")
    }

    /// Names of every test, in run order
    pub fn names(&self) -> Vec<&str> {
        self.tests()
            .iter()
            .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
            .collect()
    }

    /// Find a test by name prefix
    pub fn require(&self, prefix: &str) -> &serde_json::Value {
        self.tests()
            .iter()
            .find(|t| t["name"].as_str().is_some_and(|n| n.starts_with(prefix)))
            .unwrap_or_else(|| panic!("no test starting with {prefix:?} in {}", self.root))
    }
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

pub const PACKAGE_JSON: &str = r#"{
  "name": "pipeline-dashboard",
  "scripts": { "dev": "vite", "build": "vite build" },
  "dependencies": { "react": "^18.2.0", "recharts": "^2.8.0", "axios": "^1.6.0" }
}"#;

pub const APP_JSX: &str = r#"import { LineChart, PieChart } from 'recharts'
const BACKEND_URL = import.meta.env.VITE_BACKEND_URL
function MetricCard() {}
function StatusPill() {}
function LogsModal() {}
const ws = new WebSocket(BACKEND_URL.replace('http', 'ws') + '/ws')
"#;

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head><title>CI/CD Pipeline Health Dashboard</title></head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

/// Build commands that succeed without a JavaScript toolchain.
pub const SHELL_BUILD_CONFIG: &str = r#"[frontend]
install_command = ["true"]
build_command = ["sh", "-c", "mkdir -p dist"]
"#;

/// Temporary test project directory with helper methods.
///
/// - Auto-creates parent directories
/// - Adds `version = 1` prefix to config
/// - Panics on errors (we're in tests)
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a dashboard project that passes every static check
    pub fn dashboard() -> Self {
        let temp = Self::empty();
        temp.file("package.json", PACKAGE_JSON);
        temp.file("src/App.jsx", APP_JSX);
        temp.file("src/main.jsx", "import App from './App'\n");
        temp.file("index.html", INDEX_HTML);
        temp.file("vite.config.js", "export default {}\n");
        temp.file("start.sh", "#!/bin/sh\nnpm run dev\n");
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write smoke.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("smoke.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Create an empty directory
    pub fn dir(&self, path: impl AsRef<Path>) {
        std::fs::create_dir_all(self.dir.path().join(path.as_ref())).unwrap();
    }

    /// Remove a file
    pub fn remove(&self, path: impl AsRef<Path>) {
        std::fs::remove_file(self.dir.path().join(path.as_ref())).unwrap();
    }
}
