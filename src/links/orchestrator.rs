// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command orchestrator.
//!
//! ```text
//! clone(args)
//!   queue = all record ids (FIFO)
//!   pop id --> path populated? skip
//!          --> vcs.clone(repo, branch, path, args)   non-zero --> LinkError::Clone
//!          --> path populated? scan(path), enqueue new ids
//!
//! link()      LinkResolver::resolve_all(workdir)
//! update()    clone() then link()
//!
//! command(name, args)
//!   vcs.run(workdir)
//!   for each active record:
//!     vcs.checkout(path, branch)   non-zero --> LinkError::Checkout
//!     vcs.run(path)                no status --> LinkError::Command
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::discovery::Discovery;
use super::record::RecordSet;
use super::resolver::{LinkReport, LinkResolver};
use crate::error::{GilResult, LinkError};
use crate::git::VersionControl;
use crate::utility::fs::{is_populated_dir, normalize};

/// Drives clone, link and passthrough git commands over the discovered
/// record set.
#[derive(Debug)]
pub struct Orchestrator<V> {
    vcs: V,
    workdir: PathBuf,
    discovery: Discovery,
}

impl<V: VersionControl> Orchestrator<V> {
    /// Discover the record set around `workdir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any reachable manifest is unreadable or malformed.
    pub fn discover(vcs: V, workdir: &Path, file_name: impl Into<String>) -> GilResult<Self> {
        let workdir = normalize(workdir);
        let mut discovery = Discovery::new(file_name);
        discovery.discover(&workdir)?;
        Ok(Self {
            vcs,
            workdir,
            discovery,
        })
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    #[must_use]
    pub const fn records(&self) -> &RecordSet {
        self.discovery.records()
    }

    #[must_use]
    pub const fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Clone every record whose path is missing or empty.
    ///
    /// A fresh clone is scanned for its own manifest and any new records
    /// are cloned in the same pass.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Clone` when git reports failure, or the error of
    /// the backend or of the freshly cloned manifest.
    pub async fn clone(&mut self, args: &[String]) -> GilResult<usize> {
        let mut queue: VecDeque<_> = self.discovery.records().ids().collect();
        let mut cloned = 0;

        while let Some(id) = queue.pop_front() {
            let record = self.discovery.records().record(id).clone();
            if is_populated_dir(&record.path) {
                debug!(name = %record.name, path = %record.path.display(), "already cloned");
                continue;
            }

            info!(
                "Running git clone {} branch \"{}\" into {}",
                record.repo,
                record.branch,
                record.path.display()
            );
            let status = self
                .vcs
                .clone(&record.repo, &record.branch, &record.path, args)
                .await?;
            if !status.success() {
                return Err(LinkError::Clone {
                    repo: record.repo,
                    branch: record.branch,
                    path: record.path,
                }
                .into());
            }
            cloned += 1;

            if is_populated_dir(&record.path) {
                let inserted = self.discovery.scan(&record.path)?;
                self.discovery.mark_active(&self.workdir);
                queue.extend(inserted);
            }
        }
        Ok(cloned)
    }

    /// Create or repair every link.
    ///
    /// # Errors
    ///
    /// Returns the first resolver error.
    pub fn link(&self) -> GilResult<LinkReport> {
        LinkResolver::new(self.discovery.records(), self.discovery.file_name())
            .resolve_all(&self.workdir)
    }

    /// Clone missing records, then link.
    ///
    /// # Errors
    ///
    /// Returns the first clone or link error.
    pub async fn update(&mut self, args: &[String]) -> GilResult<LinkReport> {
        self.clone(args).await?;
        self.link()
    }

    /// Run `git <name> [args]` in the invocation directory, then in every
    /// active record after checking out its branch.
    ///
    /// A non-zero exit of the command itself is reported but not fatal.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Checkout` when a checkout fails and
    /// `LinkError::Command` when the command ends without an exit status.
    pub async fn command(&self, name: &str, args: &[String]) -> GilResult<()> {
        self.run_in(&self.workdir, name, args).await?;

        for record in self.discovery.records().active() {
            info!(
                "Running: git checkout branch \"{}\" in {}",
                record.branch,
                record.path.display()
            );
            let status = self.vcs.checkout(&record.path, &record.branch).await?;
            if !status.success() {
                return Err(LinkError::Checkout {
                    branch: record.branch.clone(),
                    path: record.path.clone(),
                }
                .into());
            }
            self.run_in(&record.path, name, args).await?;
        }
        Ok(())
    }

    async fn run_in(&self, path: &Path, name: &str, args: &[String]) -> GilResult<()> {
        info!("Running: git {name} in {}", path.display());
        let status = self.vcs.run(path, name, args).await?;
        match status.code {
            None => Err(LinkError::Command {
                command: name.to_string(),
                path: path.to_path_buf(),
            }
            .into()),
            Some(0) => Ok(()),
            Some(code) => {
                warn!(code, path = %path.display(), "git {name} exited with non-zero status");
                Ok(())
            }
        }
    }
}
