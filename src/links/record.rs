// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency records and the identity-keyed record set.
//!
//! ```text
//! RecordSet
//!   records: Vec<Record>            insertion order, index = RecordId
//!   index:   HashMap<RecordKey, RecordId>
//!
//! insert(record)
//!   key unseen --> push, Insertion::New(id)
//!   key seen   --> drop record, Insertion::Known(canonical id)
//! ```
//!
//! Identity is `(name, repo, branch)`. The path is not part of it: the first
//! path seen for an identity is canonical and every other declaration of the
//! same identity becomes a link to it.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Logical identity of a repository dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub name: String,
    pub repo: String,
    pub branch: String,
}

/// One declared repository dependency.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Human-facing label, not unique on its own.
    pub name: String,
    /// Absolute location where the dependency is expected to live.
    pub path: PathBuf,
    /// Remote locator passed to `git clone`.
    pub repo: String,
    /// Branch checked out by clone and bulk commands.
    pub branch: String,
    /// Secondary links: offset inside this dependency, mapped to an offset
    /// relative to the referencing manifest's directory.
    pub links: Vec<(String, String)>,
    /// Set once after discovery: `path` lies under the invocation directory.
    pub active: bool,
}

impl Record {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            repo: repo.into(),
            branch: branch.into(),
            links: Vec::new(),
            active: false,
        }
    }

    /// Add a secondary link. A repeated source replaces the earlier target.
    #[must_use]
    pub fn with_link(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.add_link(source.into(), target.into());
        self
    }

    pub(crate) fn add_link(&mut self, source: String, target: String) {
        if let Some(entry) = self.links.iter_mut().find(|(s, _)| *s == source) {
            entry.1 = target;
        } else {
            self.links.push((source, target));
        }
    }

    /// Identity of this record.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            repo: self.repo.clone(),
            branch: self.branch.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.path.display(),
            self.repo,
            self.branch
        )
    }
}

/// Index of a record inside a [`RecordSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(usize);

impl RecordId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Result of [`RecordSet::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// First record with this identity; now canonical.
    New(RecordId),
    /// Identity already present; the offered record was dropped.
    Known(RecordId),
}

impl Insertion {
    #[must_use]
    pub const fn id(self) -> RecordId {
        match self {
            Self::New(id) | Self::Known(id) => id,
        }
    }

    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New(_))
    }
}

/// Insertion-ordered records keyed by identity. First insertion wins.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    index: HashMap<RecordKey, RecordId>,
}

impl RecordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its identity is already present.
    ///
    /// A known identity declared with different secondary links keeps the
    /// canonical links and logs a warning.
    pub fn insert(&mut self, record: Record) -> Insertion {
        let key = record.key();
        if let Some(&id) = self.index.get(&key) {
            let canonical = &self.records[id.0];
            if canonical.links != record.links {
                warn!(
                    name = %record.name,
                    canonical = %canonical.path.display(),
                    ignored = %record.path.display(),
                    "conflicting links for the same repository, keeping the first declaration"
                );
            }
            return Insertion::Known(id);
        }

        let id = RecordId(self.records.len());
        self.records.push(record);
        self.index.insert(key, id);
        Insertion::New(id)
    }

    #[must_use]
    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.index.get(key).map(|id| &self.records[id.0])
    }

    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        self.index.contains_key(key)
    }

    /// Record by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this set.
    #[must_use]
    pub fn record(&self, id: RecordId) -> &Record {
        &self.records[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records whose path lies under the invocation directory.
    pub fn active(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.active)
    }

    /// Ids of all records, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + use<> {
        (0..self.records.len()).map(RecordId)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mark every record at or below `scope` as active.
    ///
    /// The comparison is component-wise, so `/work/lib` does not cover
    /// `/work/library`.
    pub fn mark_active(&mut self, scope: &Path) {
        for record in &mut self.records {
            if record.path.starts_with(scope) {
                record.active = true;
            }
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
