// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   normalize()         lexical absolute paths, `..` folded
//!   is_populated_dir()  exists and has at least one entry
//!   link: symlink(), read_link(), remove_entry()
//! ```

pub mod fs;
