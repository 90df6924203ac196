// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]    output_log_level, file_log_level, log_file
//! [manifest]  file_name            (".gitlinks")
//! [git]       program, clone_args  ("git", [])
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Default manifest file name looked up in every directory.
pub const DEFAULT_MANIFEST_NAME: &str = ".gitlinks";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Manifest lookup options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// File name of the dependency manifest.
    pub file_name: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

/// Git invocation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable, either a name resolved through PATH or a path.
    pub program: PathBuf,
    /// Arguments always passed to `git clone`, before the command line ones.
    pub clone_args: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
            clone_args: Vec::new(),
        }
    }
}
