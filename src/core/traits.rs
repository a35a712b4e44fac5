//! Core traits and types for running the version-control tool
//!
//! The publisher never spawns processes itself. Every invocation goes through
//! a [`CommandRunner`], which keeps the orchestration testable without git.

use crate::security::CommandError;
use std::process::Output;

// ============================================================================
// Command Results
// ============================================================================

/// Outcome of a single external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit status (-1 when the process was terminated by a signal)
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if the invocation exited with status 0
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Text to show the user when the invocation failed.
    ///
    /// git reports some failures on stdout only, so stdout is used when
    /// stderr is empty.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

impl From<Output> for CommandResult {
    fn from(output: Output) -> Self {
        Self {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

// ============================================================================
// Command Runner
// ============================================================================

/// Executes an external program and captures its output.
///
/// Implementations are bound to a working directory at construction time.
/// A non-zero exit status is NOT an error here; `Err` is reserved for
/// invocations that could not run at all.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, CommandError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, CommandError> {
        (**self).run(program, args)
    }
}
