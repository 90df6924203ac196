// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Context | Clone | Link | Update | Pull/Push/Commit/Status | Options
//! ```

use std::path::Path;
use std::process::ExitCode;

use gil_rs::cli::{self, Command};
use gil_rs::cmd::config::{load_config, run_options_command};
use gil_rs::cmd::context::run_context_command;
use gil_rs::cmd::git::run_git_command;
use gil_rs::cmd::sync::{run_clone_command, run_link_command, run_update_command};
use gil_rs::config::Config;
use gil_rs::config::types::GlobalConfig;
use gil_rs::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let command = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(command) => command,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    let workdir = match cli.global.working_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to determine working directory: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&cli.global, &workdir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(command, &config, &workdir).await
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(command: &Command, config: &Config, workdir: &Path) -> ExitCode {
    debug!(path = %workdir.display(), "Working path");

    let result = match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Context(args) => run_context_command(args, config, workdir),
        Command::Clone(args) => run_clone_command(&args.args, config, workdir).await,
        Command::Link => run_link_command(config, workdir),
        Command::Update(args) => run_update_command(&args.args, config, workdir).await,
        Command::Pull(_) | Command::Push(_) | Command::Commit(_) | Command::Status(_) => {
            match command.passthrough() {
                Some((name, args)) => run_git_command(name, args, config, workdir).await,
                None => Ok(()),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
