// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Discovery engine.
//!
//! ```text
//! find_root(start)      highest ancestor above start holding a manifest
//!        |
//!        v
//! pending = [root]      LIFO worklist
//!   pop dir --> scan(dir) --> ids of newly inserted records
//!                  |
//!                  '--> push their paths (reversed, so the first
//!                       declaration is expanded first)
//!        |
//!        v
//! mark_active(start)
//! ```
//!
//! A record is expanded only when it is newly inserted, so a cycle
//! `A -> B -> A` ends at the second arrival of `A`.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::manifest::Manifest;
use super::record::{RecordId, RecordSet};
use crate::error::GilResult;
use crate::utility::fs::normalize;

/// Highest ancestor strictly above `start` that holds a manifest named
/// `file_name`, or `start` itself when there is none.
#[must_use]
pub fn find_root(start: &Path, file_name: &str) -> PathBuf {
    start
        .ancestors()
        .skip(1)
        .filter(|dir| Manifest::path_in(dir, file_name).exists())
        .last()
        .unwrap_or(start)
        .to_path_buf()
}

/// Owner of the record set; the only component that inserts into it.
#[derive(Debug)]
pub struct Discovery {
    file_name: String,
    records: RecordSet,
}

impl Discovery {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            records: RecordSet::new(),
        }
    }

    /// Manifest file name looked up in every directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn records(&self) -> &RecordSet {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> RecordSet {
        self.records
    }

    /// Mark the records at or below `scope` active.
    pub fn mark_active(&mut self, scope: &Path) {
        self.records.mark_active(scope);
    }

    /// Read the manifest in `dir` and insert its records.
    ///
    /// Returns the ids of the records that were actually inserted, in file
    /// order. A directory without a manifest yields nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or is malformed.
    pub fn scan(&mut self, dir: &Path) -> GilResult<Vec<RecordId>> {
        let Some(manifest) = Manifest::read(dir, &self.file_name)? else {
            debug!(dir = %dir.display(), "no manifest");
            return Ok(Vec::new());
        };
        info!(manifest = %manifest.file().display(), "Discover git links");

        let mut inserted = Vec::new();
        for record in manifest.into_records() {
            let insertion = self.records.insert(record);
            if insertion.is_new() {
                inserted.push(insertion.id());
            }
        }
        Ok(inserted)
    }

    /// Discover every record reachable from the root above `start`, then
    /// mark the records under `start` active.
    ///
    /// Returns the discovery root.
    ///
    /// # Errors
    ///
    /// Returns an error on the first unreadable or malformed manifest.
    pub fn discover(&mut self, start: &Path) -> GilResult<PathBuf> {
        let start = normalize(start);
        let root = find_root(&start, &self.file_name);
        debug!(root = %root.display(), "discovery root");

        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let inserted = self.scan(&dir)?;
            pending.extend(
                inserted
                    .into_iter()
                    .rev()
                    .map(|id| self.records.record(id).path.clone()),
            );
        }

        self.records.mark_active(&start);
        Ok(root)
    }
}
