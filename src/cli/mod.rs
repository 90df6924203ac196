// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gil-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gil [global options] <command>
//! version
//! context [--json]
//! clone [args...]
//! link
//! update [args...]
//! pull | push | commit | status [args...]
//! options
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Git Links - Repository Graph Manager
///
/// Describes and manages git repository dependencies with cycles and cross
/// references.
#[derive(Debug, Parser)]
#[command(
    name = "gil",
    author,
    version,
    about = "Git links: manage git repository graphs with cycles and cross references",
    long_about = "gil-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Every directory may hold a `.gitlinks` manifest with lines of the form\n\
                  `name path repo branch [source target]...`. gil finds the topmost\n\
                  manifest above the current directory, discovers every repository\n\
                  reachable from it, clones what is missing and links repeated\n\
                  references to a single clone.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `gil.toml` in the working directory, then\n\
                  from each --config file in order, then from GIL_<SECTION>__<KEY>\n\
                  environment variables (e.g. GIL_GIT__PROGRAM). Command-line flags\n\
                  override everything. Use `gil options` to print the result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Shows the discovered git links context.
    Context(ContextArgs),

    /// Clones missing git repositories.
    Clone(GitArgs),

    /// Links git repositories.
    Link,

    /// Updates git repositories (clone & link).
    Update(GitArgs),

    /// Pulls git repositories.
    Pull(GitArgs),

    /// Pushes git repositories.
    Push(GitArgs),

    /// Commits git repositories.
    Commit(GitArgs),

    /// Shows the status of git repositories.
    Status(GitArgs),

    /// Lists all options and their values.
    Options,
}

impl Command {
    /// Git subcommand and arguments for the bulk passthrough commands.
    #[must_use]
    pub fn passthrough(&self) -> Option<(&'static str, &[String])> {
        match self {
            Self::Pull(args) => Some(("pull", &args.args)),
            Self::Push(args) => Some(("push", &args.args)),
            Self::Commit(args) => Some(("commit", &args.args)),
            Self::Status(args) => Some(("status", &args.args)),
            _ => None,
        }
    }
}

/// Arguments of the `context` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ContextArgs {
    /// Print the context as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments forwarded verbatim to git.
#[derive(Debug, Clone, Default, Args)]
pub struct GitArgs {
    /// Extra git arguments, e.g. `gil commit -m "message"`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
