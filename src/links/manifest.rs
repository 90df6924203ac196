// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest parser.
//!
//! ```text
//! # comment
//! name path repo branch [source target]...
//!   |    |
//!   |    '--> dir.join(path), normalized
//!   '-------> tokens < 4 or odd extra count --> LinkError::Format
//! ```

use std::io;
use std::path::{Path, PathBuf};

use super::record::Record;
use super::tokenize::split;
use crate::error::{GilResult, LinkError};
use crate::utility::fs::resolve;

/// One declaration with its 0-based physical line in the manifest.
#[derive(Debug, Clone)]
pub struct Entry {
    pub line: usize,
    pub record: Record,
}

/// A parsed manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    dir: PathBuf,
    file: PathBuf,
    entries: Vec<Entry>,
}

impl Manifest {
    /// Location of the manifest named `file_name` inside `dir`.
    #[must_use]
    pub fn path_in(dir: &Path, file_name: &str) -> PathBuf {
        dir.join(file_name)
    }

    /// Read and parse the manifest in `dir`.
    ///
    /// Returns `Ok(None)` when the directory has no manifest.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Io` if the file exists but cannot be read and
    /// `LinkError::Format` on a malformed line.
    pub fn read(dir: &Path, file_name: &str) -> GilResult<Option<Self>> {
        let file = Self::path_in(dir, file_name);
        let content = match std::fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LinkError::io(file, e).into()),
        };
        Self::parse(dir, file, &content).map(Some)
    }

    /// Parse manifest `content` declared in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Format` naming `file` and the line index of the
    /// first malformed line.
    pub fn parse(dir: &Path, file: impl Into<PathBuf>, content: &str) -> GilResult<Self> {
        let file = file.into();
        let mut entries = Vec::new();

        for (line, text) in content.lines().enumerate() {
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let tokens = split(text);
            if tokens.len() < 4 || (tokens.len() - 4) % 2 != 0 {
                return Err(LinkError::Format {
                    manifest: file,
                    line,
                }
                .into());
            }

            let mut tokens = tokens.into_iter();
            let mut next = || tokens.next().unwrap_or_default();
            let name = next();
            let path = resolve(dir, next());
            let repo = next();
            let branch = next();
            let mut record = Record::new(name, path, repo, branch);
            for pair in tokens.collect::<Vec<_>>().chunks_exact(2) {
                record.add_link(pair[0].clone(), pair[1].clone());
            }

            entries.push(Entry { line, record });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            file,
            entries,
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the manifest, yielding its records in file order.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.entries.into_iter().map(|entry| entry.record).collect()
    }
}
