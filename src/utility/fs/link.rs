// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Symlink primitives.

use std::io;
use std::path::{Path, PathBuf};

/// Create a symlink at `link` pointing to `target`.
///
/// Windows distinguishes file and directory links; a `target` that is a
/// file gets a file link, anything else a directory link.
///
/// # Errors
///
/// Returns the underlying I/O error; on Windows this usually means the
/// process lacks the symlink privilege.
pub fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }
    #[cfg(windows)]
    {
        if target.is_file() {
            std::os::windows::fs::symlink_file(target, link)
        } else {
            std::os::windows::fs::symlink_dir(target, link)
        }
    }
}

/// Target of the symlink at `path`, `None` if `path` is missing or not a
/// symlink.
#[must_use]
pub fn read_link(path: &Path) -> Option<PathBuf> {
    let meta = std::fs::symlink_metadata(path).ok()?;
    if meta.file_type().is_symlink() {
        std::fs::read_link(path).ok()
    } else {
        None
    }
}

/// Remove whatever occupies `path` without following symlinks.
///
/// Directories are only removed when empty. A missing path is not an error.
///
/// # Errors
///
/// Returns the underlying I/O error, e.g. `DirectoryNotEmpty`.
pub fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let file_type = meta.file_type();
    if file_type.is_dir() {
        std::fs::remove_dir(path)
    } else if file_type.is_symlink() {
        remove_symlink(path)
    } else {
        std::fs::remove_file(path)
    }
}

#[cfg(unix)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    std::fs::remove_file(path)
}

// directory symlinks are directories to the Windows API
#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    std::fs::remove_dir(path).or_else(|_| std::fs::remove_file(path))
}
