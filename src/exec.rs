//! The injected run capability.
//!
//! Managers never spawn processes themselves; they hand a fully joined
//! command line to a [`CommandRunner`]. [`ShellRunner`] is the real
//! implementation; tests substitute recording fakes.

use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Options forwarded alongside a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Suppress failure on nonzero exit; the result is returned as-is.
    pub ignore_status: bool,
}

impl RunOptions {
    pub fn ignore_status() -> Self {
        Self {
            ignore_status: true,
        }
    }
}

/// Outcome of one executed command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub exit_status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_status == 0
    }
}

/// Executes a shell command line and reports its outcome.
///
/// The command line arrives pre-joined with single spaces and no shell
/// escaping; callers passing service names containing whitespace or shell
/// metacharacters are responsible for their safety.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command_line: &str, opts: &RunOptions) -> Result<RunResult>;
}

/// Real run capability: executes via `sh -c` and captures output.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str, opts: &RunOptions) -> Result<RunResult> {
        debug!(command = %command_line, "running service command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .output()
            .with_context(|| format!("Failed to run: {}", command_line))?;

        let result = RunResult {
            exit_status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !result.success() {
            if opts.ignore_status {
                warn!(
                    command = %command_line,
                    exit_status = result.exit_status,
                    "command failed, status ignored"
                );
            } else {
                bail!(
                    "{} failed with exit code {}: {}",
                    command_line,
                    result.exit_status,
                    result.stderr.trim()
                );
            }
        }

        Ok(result)
    }
}
