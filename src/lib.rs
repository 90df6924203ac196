// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        context / sync / git / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, CLI layers   |
//!              '-------------+-------------'
//!                            |
//!                            v
//!              ,---------------------------,
//!              |           links           |
//!              | discovery, resolver,      |
//!              | orchestrator, RecordSet   |
//!              '------+--------------+-----'
//!                     |              |
//!                     v              v
//!                    git          utility
//!          VersionControl/gix     fs, symlinks
//!                     |
//!   +-----------------+-----------------------+
//!   |  core   async process builder           |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod links;
pub mod logging;
pub mod utility;
