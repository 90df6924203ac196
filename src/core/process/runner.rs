// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   build_command()   args, cwd, inherited stdio
//!        |
//!        v
//!   status()
//!        |
//!        v
//!   validate exit status
//!     no status         --> NoExitStatus (always)
//!     non-zero          --> NonZeroExit (unless ALLOW_FAILURE)
//!        |
//!        v
//!   ProcessOutput { exit_code }
//! ```

use std::fmt::Write as _;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::ProcessError;

impl ProcessBuilder {
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging and errors).
    pub(crate) fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to finish.
    ///
    /// There is no timeout: a hung child blocks the caller.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - Spawning the child process fails.
    /// - The process terminates without an exit status.
    /// - The process exits with a non-zero status and `ALLOW_FAILURE` is not set.
    pub async fn run(self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let status = self
            .build_command()
            .status()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        let output = ProcessOutput::new(status.code());

        let Some(code) = output.exit_code() else {
            error!(process = %name, "terminated without exit status");
            return Err(ProcessError::NoExitStatus { command: cmd_line });
        };

        if code != 0 && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            error!(process = %name, exit_code = code, "process failed");
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code,
            });
        }

        trace!(process = %name, exit_code = code, "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command.kill_on_drop(true);
        command
    }
}
