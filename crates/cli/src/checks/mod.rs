// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registration.

pub mod frontend;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::FrontendConfig;
use crate::process::CommandRunner;
use crate::runner::Registry;

use self::frontend::display_name;

/// Options that change which frontend checks do real work.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontendOptions {
    /// Register the build check as a passing no-op.
    pub skip_build: bool,
}

/// Build the registry of frontend checks for the project at `root`.
///
/// Registration order is fixed: manifest, required files, features,
/// environment, build, launcher, markup.
pub fn frontend_suite(
    root: &Path,
    config: &FrontendConfig,
    runner: Rc<dyn CommandRunner>,
    options: FrontendOptions,
) -> Registry {
    let root: Rc<PathBuf> = Rc::new(root.to_path_buf());
    let config = Rc::new(config.clone());
    let mut registry = Registry::new();

    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        registry.register(
            format!("{} exists and is valid", display_name(&config.manifest)),
            move |_| frontend::check_manifest(&root, &config),
        );
    }
    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        registry.register("Required source files exist", move |_| {
            frontend::check_required_files(&root, &config)
        });
    }
    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        registry.register(
            format!(
                "{} contains required functionality",
                display_name(&config.source)
            ),
            move |_| frontend::check_features(&root, &config),
        );
    }
    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        registry.register("Environment configuration is set up", move |_| {
            frontend::check_environment(&root, &config)
        });
    }
    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        let tool = config
            .build_command
            .first()
            .cloned()
            .unwrap_or_else(|| "build tool".to_string());
        let name = format!("Project can be built ({tool} available)");
        if options.skip_build {
            registry.register(name, |ctx| {
                ctx.note("Build skipped (--skip-build)");
                Ok(())
            });
        } else {
            registry.register(name, move |ctx| {
                frontend::check_build(&root, &config, runner.as_ref(), ctx)
            });
        }
    }
    {
        let (root, config) = (Rc::clone(&root), Rc::clone(&config));
        registry.register("Start script is available", move |_| {
            frontend::check_launcher(&root, &config)
        });
    }
    registry.register("HTML template is properly configured", move |_| {
        frontend::check_markup(&root, &config)
    });

    registry
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
