// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link resolver.
//!
//! ```text
//! resolve_all(start)
//!   visit root, then the paths root declares, then every record path
//!   (each directory once)
//!        |
//!        v
//!   for each entry of the directory's manifest:
//!     canonical = records[entry.key]
//!     link(canonical.path, entry.path)
//!     link(canonical.path/source, dir/target)   per secondary link
//!     entry.path populated? else LinkError::MissingPath
//!
//! link(source, destination)
//!   source == destination                 --> Same
//!   symlink to source, target non-empty   --> Unchanged
//!   populated real directory              --> Kept (warn)
//!   symlink elsewhere / dangling          --> Replaced
//!   missing / empty dir / real file       --> Created | Replaced
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use super::discovery::find_root;
use super::manifest::Manifest;
use super::record::RecordSet;
use crate::error::{GilResult, LinkError};
use crate::utility::fs::link::{read_link, remove_entry, symlink};
use crate::utility::fs::{is_populated, is_populated_dir, normalize, resolve};

/// What [`link`] did to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Source and destination are the same path.
    Same,
    /// Destination already links to the source.
    Unchanged,
    /// Nothing was at the destination; a link was created.
    Created,
    /// A stale link, file or empty directory was replaced.
    Replaced,
    /// A populated real directory was left alone.
    Kept,
}

/// Per-outcome counters for one resolver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub same: usize,
    pub unchanged: usize,
    pub created: usize,
    pub replaced: usize,
    pub kept: usize,
}

impl LinkReport {
    const fn add(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::Same => self.same += 1,
            LinkOutcome::Unchanged => self.unchanged += 1,
            LinkOutcome::Created => self.created += 1,
            LinkOutcome::Replaced => self.replaced += 1,
            LinkOutcome::Kept => self.kept += 1,
        }
    }

    /// Number of filesystem changes made.
    #[must_use]
    pub const fn changed(&self) -> usize {
        self.created + self.replaced
    }
}

/// Make `destination` a symlink to `source`.
///
/// Idempotent: a second call with the same arguments reports
/// [`LinkOutcome::Unchanged`] or [`LinkOutcome::Same`].
///
/// # Errors
///
/// Returns `LinkError::Io` if parent directories, the old entry or the
/// link itself cannot be created or removed.
pub fn link(source: &Path, destination: &Path) -> GilResult<LinkOutcome> {
    if source == destination {
        return Ok(LinkOutcome::Same);
    }

    match read_link(destination) {
        Some(target) if target == source && is_populated(destination) => {
            trace!(destination = %destination.display(), "link up to date");
            return Ok(LinkOutcome::Unchanged);
        }
        None if is_populated_dir(destination) => {
            warn!(
                source = %source.display(),
                destination = %destination.display(),
                "destination is a populated directory, not linking"
            );
            return Ok(LinkOutcome::Kept);
        }
        _ => {}
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LinkError::io(parent, e))?;
    }
    let existed = std::fs::symlink_metadata(destination).is_ok();
    remove_entry(destination).map_err(|e| LinkError::io(destination, e))?;
    symlink(source, destination).map_err(|e| LinkError::io(destination, e))?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        "Update git link"
    );
    Ok(if existed {
        LinkOutcome::Replaced
    } else {
        LinkOutcome::Created
    })
}

/// Builds and repairs the symlink topology for a discovered record set.
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'a> {
    records: &'a RecordSet,
    file_name: &'a str,
}

impl<'a> LinkResolver<'a> {
    #[must_use]
    pub const fn new(records: &'a RecordSet, file_name: &'a str) -> Self {
        Self { records, file_name }
    }

    /// Link every manifest reachable from the root above `start`.
    ///
    /// # Errors
    ///
    /// Returns the first format, filesystem or missing-path error.
    pub fn resolve_all(&self, start: &Path) -> GilResult<LinkReport> {
        let root = find_root(&normalize(start), self.file_name);
        let mut report = LinkReport::default();
        let mut visited = HashSet::new();

        let declared = self.resolve_dir(&root, &mut visited, &mut report)?;
        for dir in &declared {
            self.resolve_dir(dir, &mut visited, &mut report)?;
        }
        for record in self.records {
            self.resolve_dir(&record.path, &mut visited, &mut report)?;
        }

        debug!(?report, "link pass finished");
        Ok(report)
    }

    /// Link the manifest in `dir`. Returns the declared paths of entries
    /// with a canonical record.
    fn resolve_dir(
        &self,
        dir: &Path,
        visited: &mut HashSet<PathBuf>,
        report: &mut LinkReport,
    ) -> GilResult<Vec<PathBuf>> {
        if !visited.insert(dir.to_path_buf()) {
            return Ok(Vec::new());
        }
        let Some(manifest) = Manifest::read(dir, self.file_name)? else {
            return Ok(Vec::new());
        };

        let mut declared = Vec::new();
        for entry in manifest.entries() {
            let path = &entry.record.path;
            if let Some(canonical) = self.records.get(&entry.record.key()) {
                declared.push(path.clone());
                report.add(link(&canonical.path, path)?);
                for (source, target) in &canonical.links {
                    let outcome = link(&resolve(&canonical.path, source), &resolve(dir, target))?;
                    report.add(outcome);
                }
            }

            if !is_populated_dir(path) {
                return Err(LinkError::MissingPath {
                    manifest: manifest.file().to_path_buf(),
                    line: entry.line,
                    name: entry.record.name.clone(),
                    path: path.clone(),
                }
                .into());
            }
        }
        Ok(declared)
    }
}
