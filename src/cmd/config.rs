// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for gil-rs.

use std::path::Path;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, LOCAL_CONFIG_NAME};
use crate::error::Result;

/// Environment variable prefix, e.g. `GIL_GIT__PROGRAM`.
pub const ENV_PREFIX: &str = "GIL";

/// Assemble every configuration source for a run in `workdir`.
///
/// # Errors
///
/// Returns an error if a command-line override cannot be applied.
pub fn build_config_loader(global: &GlobalOptions, workdir: &Path) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(workdir.join(LOCAL_CONFIG_NAME));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    global.apply_overrides(loader.with_env_prefix(ENV_PREFIX))
}

/// Load the effective configuration for a run in `workdir`.
///
/// # Errors
///
/// Returns an error if any source is unreadable or holds invalid values.
pub fn load_config(global: &GlobalOptions, workdir: &Path) -> Result<Config> {
    build_config_loader(global, workdir)?.build()
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}
