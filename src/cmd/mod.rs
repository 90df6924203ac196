// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config   options, config loading
//!   context  discovered records (text / JSON)
//!   sync     clone, link, update
//!   git      pull, push, commit, status
//! ```

pub mod config;
pub mod context;
pub mod git;
pub mod sync;
