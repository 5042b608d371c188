// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frontend project checks.
//!
//! Each check inspects one aspect of a frontend project (manifest, source
//! layout, feature markers, environment wiring, build, launcher, HTML
//! entry) and fails with a message naming the missing path or marker.

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::check::{CaseContext, CheckError};
use crate::config::FrontendConfig;
use crate::markers;
use crate::process::{CommandRunner, run_checked};

/// Display name for a configured path (its file name, or the path itself).
pub(crate) fn display_name(rel: &str) -> String {
    Path::new(rel)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| rel.to_string())
}

fn read_text(root: &Path, rel: &str) -> Result<(PathBuf, String), CheckError> {
    let path = root.join(rel);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok((path, content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CheckError::missing(&path, format!("{rel} not found")))
        }
        Err(e) => Err(CheckError::invalid(&path, format!("could not read {rel}: {e}"))),
    }
}

/// Uppercase the first character ("react" -> "React").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True if `manifest[section][key]` is present and not empty/false/null/zero.
fn declares(manifest: &JsonValue, section: &str, key: &str) -> bool {
    match manifest.get(section).and_then(|s| s.get(key)) {
        None | Some(JsonValue::Null) | Some(JsonValue::Bool(false)) => false,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}

/// The manifest exists, is valid JSON, and declares the required
/// dependencies and scripts.
pub fn check_manifest(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    let name = display_name(&config.manifest);
    let path = root.join(&config.manifest);
    if !path.exists() {
        return Err(CheckError::missing(&path, format!("{name} not found")));
    }

    let (path, content) = read_text(root, &config.manifest)?;
    let manifest: JsonValue = serde_json::from_str(&content)
        .map_err(|e| CheckError::invalid(&path, format!("{name} is not valid JSON: {e}")))?;

    for dep in &config.dependencies {
        if !declares(&manifest, "dependencies", dep) {
            return Err(CheckError::mismatch(
                dep,
                format!("{} dependency missing", capitalize(dep)),
            ));
        }
    }

    for script in &config.scripts {
        if !declares(&manifest, "scripts", script) {
            return Err(CheckError::mismatch(
                script,
                format!("{script} script missing"),
            ));
        }
    }

    Ok(())
}

/// Every required file exists. Fails on the first missing one.
pub fn check_required_files(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    match config
        .required_files
        .iter()
        .find(|rel| !root.join(rel).exists())
    {
        Some(rel) => Err(CheckError::missing(
            root.join(rel),
            format!("Required file missing: {rel}"),
        )),
        None => Ok(()),
    }
}

/// The main source contains every feature marker.
pub fn check_features(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    let (_, content) = read_text(root, &config.source)?;
    match markers::first_missing(&content, &config.features) {
        Some(marker) => Err(CheckError::mismatch(
            marker,
            format!(
                "Required feature missing in {}: {marker}",
                display_name(&config.source)
            ),
        )),
        None => Ok(()),
    }
}

/// The bundler config exists and the source references the backend URL
/// environment variable.
pub fn check_environment(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    let bundler = root.join(&config.bundler_config);
    if !bundler.exists() {
        return Err(CheckError::missing(
            &bundler,
            format!("{} not found", display_name(&config.bundler_config)),
        ));
    }

    let sample = root.join(&config.env_sample);
    tracing::debug!(
        "environment sample {} {}",
        sample.display(),
        if sample.exists() { "found" } else { "absent" }
    );

    let (_, content) = read_text(root, &config.source)?;
    if !content.contains(&config.env_marker) {
        return Err(CheckError::mismatch(
            &config.env_marker,
            format!("{} environment variable not configured", config.env_marker),
        ));
    }
    Ok(())
}

/// Install dependencies if needed, build, and require the output directory.
///
/// Every failure is reported as "Build failed: <cause>".
pub fn check_build(
    root: &Path,
    config: &FrontendConfig,
    runner: &dyn CommandRunner,
    ctx: &mut CaseContext<'_>,
) -> Result<(), CheckError> {
    build(root, config, runner, ctx).map_err(|e| e.context("Build failed"))
}

fn build(
    root: &Path,
    config: &FrontendConfig,
    runner: &dyn CommandRunner,
    ctx: &mut CaseContext<'_>,
) -> Result<(), CheckError> {
    if !root.join(&config.install_dir).exists() {
        ctx.note("Installing dependencies first...");
        run_checked(runner, &config.install_command, root)?;
    }

    run_checked(runner, &config.build_command, root)?;

    let output = root.join(&config.output_dir);
    if !output.is_dir() {
        return Err(CheckError::missing(
            &output,
            format!(
                "Build output ({} folder) not created",
                display_name(&config.output_dir)
            ),
        ));
    }

    ctx.note("Build completed successfully");
    Ok(())
}

/// The launcher script exists and runs the dev server.
pub fn check_launcher(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    let name = display_name(&config.launcher);
    let path = root.join(&config.launcher);
    if !path.exists() {
        return Err(CheckError::missing(&path, format!("{name} script not found")));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|_| CheckError::invalid(&path, format!("Could not read {name} script")))?;
    if !content.contains(&config.launcher_command) {
        return Err(CheckError::mismatch(
            &config.launcher_command,
            format!(
                "{name} does not contain proper {} command",
                config.launcher_command
            ),
        ));
    }
    Ok(())
}

/// The HTML entry has the dashboard title, the script entry point, and
/// the root element.
pub fn check_markup(root: &Path, config: &FrontendConfig) -> Result<(), CheckError> {
    let (_, content) = read_text(root, &config.markup)?;

    let expectations = [
        (&config.title, "HTML title not properly set"),
        (&config.entry_point, "Main script entry point not found in HTML"),
        (&config.root_element, "React root div not found in HTML"),
    ];
    for (marker, message) in expectations {
        if !content.contains(marker.as_str()) {
            return Err(CheckError::mismatch(marker, message));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "frontend_tests.rs"]
mod tests;
