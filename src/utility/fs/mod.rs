// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers shared by the manifest parser and the link resolver.
//!
//! ```text
//! normalize()         /a/b/../c/./d --> /a/c/d   (no filesystem access)
//! is_populated_dir()  follows symlinks, false for files and empty dirs
//! is_populated()      populated dir or non-empty file, follows symlinks
//! link:  symlink()       unix symlink / windows file or directory symlink
//!        remove_entry()  symlink, file or empty directory
//! ```

pub mod link;

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` and fold `..` into the parent.
///
/// `..` at the root stays at the root. Symlinks are not resolved, so
/// `a/link/..` becomes `a` even when `link` points elsewhere.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}

/// Join `relative` onto `base` and normalize the result.
#[must_use]
pub fn resolve(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(relative))
}

/// True if `path` is a directory (directly or through a symlink) holding
/// at least one entry.
#[must_use]
pub fn is_populated_dir(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_some())
}

/// True if `path` is a populated directory or a non-empty file, following
/// symlinks.
#[must_use]
pub fn is_populated(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => is_populated_dir(path),
        Ok(meta) => meta.len() > 0,
        Err(_) => false,
    }
}
