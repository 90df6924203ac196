// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone, link and update commands.
//!
//! ```text
//! clone   Orchestrator<ShellBackend>::clone
//! link    Discovery + LinkResolver (no git needed)
//! update  clone, then link
//! ```

use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::git::ShellBackend;
use crate::links::{Discovery, LinkReport, LinkResolver, Orchestrator};

fn orchestrator(config: &Config, workdir: &Path) -> Result<Orchestrator<ShellBackend>> {
    let backend = ShellBackend::from_config(&config.git, workdir)?;
    Ok(Orchestrator::discover(
        backend,
        workdir,
        &config.manifest.file_name,
    )?)
}

fn log_report(report: &LinkReport) {
    info!(
        created = report.created,
        replaced = report.replaced,
        unchanged = report.unchanged,
        kept = report.kept,
        "Git links updated"
    );
}

/// Clone every missing repository.
///
/// # Errors
///
/// Returns an error if discovery fails or a clone fails.
pub async fn run_clone_command(args: &[String], config: &Config, workdir: &Path) -> Result<()> {
    let cloned = orchestrator(config, workdir)?.clone(args).await?;
    info!(count = cloned, "Cloned git repositories");
    Ok(())
}

/// Create or repair every link.
///
/// # Errors
///
/// Returns an error if discovery fails, a link cannot be created or a
/// declared path is missing.
pub fn run_link_command(config: &Config, workdir: &Path) -> Result<()> {
    let mut discovery = Discovery::new(config.manifest.file_name.as_str());
    discovery.discover(workdir)?;
    let report =
        LinkResolver::new(discovery.records(), discovery.file_name()).resolve_all(workdir)?;
    log_report(&report);
    Ok(())
}

/// Clone every missing repository, then link.
///
/// # Errors
///
/// Returns the first clone or link error.
pub async fn run_update_command(args: &[String], config: &Config, workdir: &Path) -> Result<()> {
    let report = orchestrator(config, workdir)?.update(args).await?;
    log_report(&report);
    Ok(())
}
