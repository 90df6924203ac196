// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gil-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gil.toml in the invocation directory (optional)
//! 3. --config FILE (repeatable, in order)
//! 4. GIL_* env vars
//! 5. CLI overrides (--log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIL_MANIFEST__FILE_NAME=.deps  → manifest.file_name = ".deps"
//! GIL_GIT__PROGRAM=/opt/git      → git.program = "/opt/git"
//! GIL_GLOBAL__OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, ManifestConfig};

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_NAME: &str = "gil.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Manifest lookup options.
    pub manifest: ManifestConfig,
    /// Git invocation options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gil_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gil.toml")
    ///     .with_env_prefix("GIL")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty or path-like manifest
    /// file name, or an empty git program.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let name = &self.manifest.file_name;
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                section: "manifest".to_string(),
                key: "file_name".to_string(),
                message: format!("expected a plain file name, got '{name}'"),
            });
        }
        if self.git.program.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line,
    /// keys sorted and aligned.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "manifest.file_name".to_string(),
            self.manifest.file_name.clone(),
        );
        options.insert(
            "git.program".to_string(),
            self.git.program.display().to_string(),
        );
        options.insert("git.clone_args".to_string(), self.git.clone_args.join(" "));

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
