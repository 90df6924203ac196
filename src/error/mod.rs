// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           GilError (~16 bytes)
//!                  |
//!   +------+------++------+-------+
//!   |      |       |      |       |
//!   v      v       v      v       v
//! Link    Git   Config Process   Io
//!  Box    Box    Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Link    Format, MissingPath, Clone, Checkout, Command, Io
//!   Git     Gix, ExecutableNotFound
//!   Config  InvalidValue
//!   Process SpawnFailed, NonZeroExit, NoExitStatus
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GilError`].
pub type GilResult<T> = std::result::Result<T, GilError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum GilError {
    /// Manifest, link or orchestration error.
    #[error(transparent)]
    Link(#[from] Box<LinkError>),

    /// Git backend error.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GilError {
                fn from(err: $error) -> Self {
                    GilError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    LinkError => Link,
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Link Errors ---

/// Errors raised by the manifest parser, the link resolver and the
/// command orchestrator.
///
/// Line numbers are 0-based physical line indices in the manifest file.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Manifest line with an invalid token count.
    #[error(
        "{}:{line}: invalid link format, expected 'name path repo branch [source target]...'",
        manifest.display()
    )]
    Format { manifest: PathBuf, line: usize },

    /// Declared dependency path is missing or empty after linking.
    #[error(
        "{}:{line}: invalid link path, check '{name}' git repository in {}",
        manifest.display(),
        path.display()
    )]
    MissingPath {
        manifest: PathBuf,
        line: usize,
        name: String,
        path: PathBuf,
    },

    /// `git clone` exited unsuccessfully.
    #[error("failed to run git clone {repo} branch \"{branch}\" into {}", path.display())]
    Clone {
        repo: String,
        branch: String,
        path: PathBuf,
    },

    /// `git checkout` exited unsuccessfully.
    #[error("failed to run git checkout branch \"{branch}\" in {}", path.display())]
    Checkout { branch: String, path: PathBuf },

    /// Passthrough command did not report a completion status.
    #[error("failed to run git {command} in {}", path.display())]
    Command { command: String, path: PathBuf },

    /// Filesystem error while reading a manifest or updating a link.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LinkError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git backend errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git executable could not be located.
    #[error("git executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process terminated without an exit code (killed by a signal).
    #[error("process '{command}' terminated without an exit status")]
    NoExitStatus { command: String },
}
