// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bulk git passthrough commands (pull, push, commit, status).

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::git::ShellBackend;
use crate::links::Orchestrator;

/// Run `git <name> [args]` in `workdir` and every active repository.
///
/// # Errors
///
/// Returns an error if discovery fails, a checkout fails or git ends
/// without an exit status.
pub async fn run_git_command(
    name: &str,
    args: &[String],
    config: &Config,
    workdir: &Path,
) -> Result<()> {
    let backend = ShellBackend::from_config(&config.git, workdir)?;
    let orchestrator = Orchestrator::discover(backend, workdir, &config.manifest.file_name)?;
    orchestrator.command(name, args).await?;
    Ok(())
}
