// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `[frontend]` section: what the frontend checks look for.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

/// Expectations for the frontend project layout.
///
/// Paths are relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Package manifest (JSON).
    pub manifest: String,
    /// Dependencies the manifest must declare.
    pub dependencies: Vec<String>,
    /// Scripts the manifest must declare.
    pub scripts: Vec<String>,

    /// Files that must exist.
    pub required_files: Vec<String>,

    /// Main application source inspected for feature markers.
    pub source: String,
    /// Feature markers the source must contain.
    pub features: Vec<String>,

    /// Bundler configuration file.
    pub bundler_config: String,
    /// Environment variable reference the source must contain.
    pub env_marker: String,
    /// Optional environment sample file (probed, never required).
    pub env_sample: String,

    /// Dependency install directory; install runs when it is absent.
    pub install_dir: String,
    /// Build output directory that must exist after the build.
    pub output_dir: String,
    pub install_command: Vec<String>,
    pub build_command: Vec<String>,
    /// Upper bound on each install/build subprocess.
    #[serde(deserialize_with = "super::duration::deserialize")]
    pub build_timeout: Duration,

    /// Shell launcher script.
    pub launcher: String,
    /// Command the launcher must contain.
    pub launcher_command: String,

    /// HTML entry document.
    pub markup: String,
    pub title: String,
    pub entry_point: String,
    pub root_element: String,

    #[serde(flatten)]
    pub(super) unknown: BTreeMap<String, toml::Value>,
}

impl FrontendConfig {
    pub const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(300);
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            manifest: "./package.json".to_string(),
            dependencies: strings(&["react", "recharts", "axios"]),
            scripts: strings(&["dev"]),
            required_files: strings(&[
                "./src/App.jsx",
                "./src/main.jsx",
                "./index.html",
                "./vite.config.js",
            ]),
            source: "./src/App.jsx".to_string(),
            features: strings(&[
                "MetricCard",
                "StatusPill",
                "LogsModal",
                "LineChart",
                "PieChart",
                "WebSocket",
                "BACKEND_URL",
            ]),
            bundler_config: "./vite.config.js".to_string(),
            env_marker: "VITE_BACKEND_URL".to_string(),
            env_sample: "../.env.sample".to_string(),
            install_dir: "./node_modules".to_string(),
            output_dir: "./dist".to_string(),
            install_command: strings(&["npm", "install"]),
            build_command: strings(&["npm", "run", "build"]),
            build_timeout: Self::DEFAULT_BUILD_TIMEOUT,
            launcher: "./start.sh".to_string(),
            launcher_command: "npm run dev".to_string(),
            markup: "./index.html".to_string(),
            title: "CI/CD Pipeline Health Dashboard".to_string(),
            entry_point: r#"src="/src/main.jsx""#.to_string(),
            root_element: r#"id="root""#.to_string(),
            unknown: BTreeMap::new(),
        }
    }
}
