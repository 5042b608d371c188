// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles smoke.toml parsing with version validation and unknown key
//! warnings. Every key is optional; missing keys fall back to the
//! dashboard project's expectations.

pub mod duration;
mod frontend;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

pub use frontend::FrontendConfig;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "smoke.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Frontend check expectations.
    #[serde(default)]
    pub frontend: FrontendConfig,

    /// Assertion sequence settings.
    #[serde(default)]
    pub selftest: SelftestConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            frontend: FrontendConfig::default(),
            selftest: SelftestConfig::default(),
            unknown: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Dotted paths of keys that were present but not recognized.
    pub fn unknown_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.unknown.keys().cloned().collect();
        keys.extend(
            self.frontend
                .unknown
                .keys()
                .map(|k| format!("frontend.{k}")),
        );
        keys.extend(
            self.selftest
                .unknown
                .keys()
                .map(|k| format!("selftest.{k}")),
        );
        keys
    }
}

/// Settings for `smoke selftest`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelftestConfig {
    /// Probability in [0, 1] of a simulated failure after the assertions.
    pub fail_rate: f64,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl SelftestConfig {
    pub const DEFAULT_FAIL_RATE: f64 = 0.1;
}

impl Default for SelftestConfig {
    fn default() -> Self {
        Self {
            fail_rate: Self::DEFAULT_FAIL_RATE,
            unknown: BTreeMap::new(),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config, printing a warning for each unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let config = load(path)?;
    for key in config.unknown_keys() {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // Version first, so a future config gets a clear message instead of a
    // confusing field error.
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    validate(&config).map_err(config_error)?;
    Ok(config)
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    let rate = config.selftest.fail_rate;
    if !(0.0..=1.0).contains(&rate) {
        return Err(format!(
            "selftest.fail_rate must be between 0 and 1 (got {rate})"
        ));
    }
    if config.frontend.install_command.is_empty() {
        return Err("frontend.install_command must not be empty".to_string());
    }
    if config.frontend.build_command.is_empty() {
        return Err("frontend.build_command must not be empty".to_string());
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "smoke: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
