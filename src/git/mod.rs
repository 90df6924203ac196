// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!      links::orchestrator        cmd::context
//!               |                      |
//!               v                      v
//!      ,------------------,   ,------------------,
//!      |  VersionControl  |   |     GitQuery     |
//!      |  (async, write)  |   |  (sync, read)    |
//!      '--------+---------'   '--------+---------'
//!               |                      |
//!               v                      v
//!         ShellBackend            GixBackend
//!         .clone                  .is_git_repo
//!         .checkout               .current_branch
//!         .run
//! ```
//!
//! **`ShellBackend`**: git CLI through `core::process`, explicit working
//! directory for every call.
//! **`GixBackend`**: pure Rust, no subprocess, read-only.

pub mod backend;

pub use backend::{CommandStatus, GitQuery, GixBackend, ShellBackend, VersionControl};
