// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest discovery, deduplication and link resolution.
//!
//! ```text
//!   tokenize --> manifest --> discovery --> RecordSet
//!                                 ^             |
//!                                 |      +------+------+
//!                          scan() |      v             v
//!                                 |  resolver     orchestrator
//!                                 |  (symlinks)   clone/link/command
//!                                 '--------------------'
//!                                    fresh clones grow the set
//! ```
//!
//! # Manifest format
//!
//! ```text
//! # name  path        repo                      branch  [source target]...
//! libA    ./vendor/a  https://x/a.git           main
//! libB    ./vendor/b  "https://x/my repo.git"   dev     include ../include/b
//! ```

pub mod discovery;
pub mod manifest;
pub mod orchestrator;
pub mod record;
pub mod resolver;
pub mod tokenize;

pub use discovery::{Discovery, find_root};
pub use manifest::{Entry, Manifest};
pub use orchestrator::Orchestrator;
pub use record::{Insertion, Record, RecordId, RecordKey, RecordSet};
pub use resolver::{LinkOutcome, LinkReport, LinkResolver, link};

#[cfg(test)]
mod tests;
