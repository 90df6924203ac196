// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)        --> GixBackend (pure Rust gix)
//! VersionControl (write) --> ShellBackend (git CLI)
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::config::types::GitConfig;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{GilResult, GitError, GixError, ProcessError};

// --- Command Status ---

/// Completion status reported by a git invocation.
///
/// `code` is `None` when the process ended without an exit status, e.g.
/// killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    #[must_use]
    pub const fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Exit status 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// The process reported an exit status at all.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.code.is_some()
    }
}

// --- VersionControl Trait (Write operations) ---

/// Version control operations driven by the command orchestrator.
///
/// Every call receives the directory it acts on explicitly. Implementors
/// report the child's status instead of judging it; the caller decides
/// which statuses are fatal.
pub trait VersionControl {
    /// Clone `repo` at `branch` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone could not be started.
    fn clone(
        &self,
        repo: &str,
        branch: &str,
        dest: &Path,
        extra_args: &[String],
    ) -> impl Future<Output = GilResult<CommandStatus>>;

    /// Check out `branch` inside `repo_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout could not be started.
    fn checkout(
        &self,
        repo_path: &Path,
        branch: &str,
    ) -> impl Future<Output = GilResult<CommandStatus>>;

    /// Run `git <command> [args]` inside `repo_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started.
    fn run(
        &self,
        repo_path: &Path,
        command: &str,
        args: &[String],
    ) -> impl Future<Output = GilResult<CommandStatus>>;
}

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> GilResult<Option<String>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> GilResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Output is inherited so the user sees git directly. Clones run in the
/// invocation directory so relative repository locators resolve from there.
#[derive(Debug)]
pub struct ShellBackend {
    program: PathBuf,
    workdir: PathBuf,
    clone_args: Vec<String>,
}

impl ShellBackend {
    /// Create a backend for the given git executable.
    ///
    /// `program` may be a bare name (looked up in PATH) or a path.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if the executable cannot be
    /// resolved.
    pub fn new(program: impl AsRef<Path>, workdir: impl Into<PathBuf>) -> GilResult<Self> {
        let name = program.as_ref().to_string_lossy().into_owned();
        let program = ProcessBuilder::find(&name)
            .ok_or(GitError::ExecutableNotFound { name })?;
        Ok(Self {
            program,
            workdir: workdir.into(),
            clone_args: Vec::new(),
        })
    }

    /// Create a backend from the `[git]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if `git.program` cannot be
    /// resolved.
    pub fn from_config(config: &GitConfig, workdir: impl Into<PathBuf>) -> GilResult<Self> {
        let mut backend = Self::new(&config.program, workdir)?;
        backend.clone_args.clone_from(&config.clone_args);
        Ok(backend)
    }

    /// Resolved git executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn git(&self, cwd: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .name("git")
            .cwd(cwd)
            .flag(ProcessFlags::ALLOW_FAILURE)
    }

    async fn execute(builder: ProcessBuilder) -> GilResult<CommandStatus> {
        match builder.run().await {
            Ok(output) => Ok(CommandStatus::new(output.exit_code())),
            Err(ProcessError::NoExitStatus { .. }) => Ok(CommandStatus::new(None)),
            Err(e) => Err(e.into()),
        }
    }
}

impl VersionControl for ShellBackend {
    async fn clone(
        &self,
        repo: &str,
        branch: &str,
        dest: &Path,
        extra_args: &[String],
    ) -> GilResult<CommandStatus> {
        let builder = self
            .git(&self.workdir)
            .arg("clone")
            .args(&self.clone_args)
            .args(extra_args)
            .args(["-b", branch, repo])
            .arg(dest);
        Self::execute(builder).await
    }

    async fn checkout(&self, repo_path: &Path, branch: &str) -> GilResult<CommandStatus> {
        Self::execute(self.git(repo_path).args(["checkout", branch])).await
    }

    async fn run(
        &self,
        repo_path: &Path,
        command: &str,
        args: &[String],
    ) -> GilResult<CommandStatus> {
        Self::execute(self.git(repo_path).arg(command).args(args)).await
    }
}
