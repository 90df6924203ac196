// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .flag()
//!   .run()
//!       --> tokio::process::Command (explicit current_dir)
//!       --> ProcessOutput { exit_code }
//! ```

pub mod builder;
mod runner;
