// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Context command: show the discovered git links.

use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::cli::ContextArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::{GitQuery, GixBackend};
use crate::links::{Discovery, Record};

/// One record as shown by `gil context`.
#[derive(Debug, Serialize)]
pub struct ContextEntry<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    /// Branch checked out in the record's own repository, if cloned.
    pub checked_out: Option<String>,
}

/// Everything `gil context` prints.
#[derive(Debug, Serialize)]
pub struct ContextReport<'a> {
    pub working_path: &'a Path,
    pub root: PathBuf,
    pub records: Vec<ContextEntry<'a>>,
}

impl ContextReport<'_> {
    /// Human-readable listing, one line per record.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Working path: {}", self.working_path.display()),
            "Gil context:".to_string(),
        ];
        for entry in &self.records {
            let mut line = entry.record.to_string();
            if entry.record.active {
                line.push_str(" [active]");
            }
            if let Some(branch) = &entry.checked_out {
                let _ = write!(line, " (on {branch})");
            }
            lines.push(line);
        }
        lines
    }
}

/// Branch checked out at `path` when `path` is the top of a work tree.
fn checked_out_branch(path: &Path) -> Option<String> {
    // gix::discover walks upwards; only ask about the record's own repo
    if !path.join(".git").exists() || !GixBackend::is_git_repo(path) {
        return None;
    }
    GixBackend::current_branch(path).ok().flatten()
}

/// Build the context report for `discovery`.
#[must_use]
pub fn build_report<'a>(
    discovery: &'a Discovery,
    root: PathBuf,
    workdir: &'a Path,
) -> ContextReport<'a> {
    let records = discovery
        .records()
        .iter()
        .map(|record| ContextEntry {
            record,
            checked_out: checked_out_branch(&record.path),
        })
        .collect();
    ContextReport {
        working_path: workdir,
        root,
        records,
    }
}

/// Main handler for the context command.
///
/// # Errors
///
/// Returns an error if discovery fails or the report cannot be serialized.
pub fn run_context_command(args: &ContextArgs, config: &Config, workdir: &Path) -> Result<()> {
    let mut discovery = Discovery::new(config.manifest.file_name.as_str());
    let root = discovery.discover(workdir)?;
    let report = build_report(&discovery, root, workdir);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
