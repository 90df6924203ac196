// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!        core
//!          |
//!          v
//!       process
//!          |
//!   ProcessBuilder --> tokio::process::Command
//!   ProcessFlags       ALLOW_FAILURE
//!   ProcessOutput      exit_code
//! ```

pub mod process;
