//! SafeCommandExecutor: whitelisted command execution in an explicit working directory
//!
//! # Security Features
//!
//! - **Whitelist-based validation**: Only pre-approved commands can execute
//! - **Injection prevention**: Uses `std::process::Command`, never a shell
//! - **Working directory control**: Passed to each child; the process's own
//!   current directory is never changed
//!
//! No timeout: a hanging `git push` blocks the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use git_publisher::{CommandRunner, SafeCommandExecutor};
//!
//! let executor = SafeCommandExecutor::new("/srv/demo-portal").unwrap();
//! let result = executor.run("git", &["status", "--short"]).unwrap();
//! println!("{}", result.stdout);
//! ```

use crate::core::traits::{CommandResult, CommandRunner};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Allowed commands whitelist.
const ALLOWED_COMMANDS: &[&str] = &["git"];

/// Errors that can occur during command execution
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command is not in the allowed whitelist
    #[error("Command '{0}' is not in the allowed whitelist")]
    CommandNotAllowed(String),

    /// Working directory does not exist or is not a directory
    #[error("Working directory does not exist: {0}")]
    InvalidWorkingDirectory(PathBuf),

    /// Command could not be started (e.g., binary not found, permission denied)
    #[error("Command execution failed: {0}")]
    ExecutionFailed(String),
}

/// Safe command executor bound to one working directory
#[derive(Debug)]
pub struct SafeCommandExecutor {
    working_dir: PathBuf,
}

impl SafeCommandExecutor {
    /// Create a new SafeCommandExecutor with working directory validation.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidWorkingDirectory` if `working_dir` is not
    /// an existing directory.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Result<Self, CommandError> {
        let working_dir = working_dir.as_ref().to_path_buf();

        if !working_dir.is_dir() {
            return Err(CommandError::InvalidWorkingDirectory(working_dir));
        }

        Ok(Self { working_dir })
    }

    /// Execute a whitelisted command and capture its output.
    ///
    /// A non-zero exit status is returned as a normal [`CommandResult`].
    ///
    /// # Errors
    ///
    /// - `CommandError::CommandNotAllowed` - Command not in whitelist
    /// - `CommandError::ExecutionFailed` - Binary not found or could not start
    pub fn execute(&self, command: &str, args: &[&str]) -> Result<CommandResult, CommandError> {
        if !ALLOWED_COMMANDS.contains(&command) {
            return Err(CommandError::CommandNotAllowed(command.to_string()));
        }

        tracing::trace!(command, ?args, dir = %self.working_dir.display(), "spawning");

        let output = Command::new(command)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| CommandError::ExecutionFailed(format!("{}: {}", command, e)))?;

        Ok(CommandResult::from(output))
    }
}

impl CommandRunner for SafeCommandExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, CommandError> {
        self.execute(program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_with_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(SafeCommandExecutor::new(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_invalid_working_directory() {
        let result = SafeCommandExecutor::new("/nonexistent/directory/that/does/not/exist");
        assert!(
            matches!(result, Err(CommandError::InvalidWorkingDirectory(_))),
            "Should reject non-existent working directory"
        );
    }

    #[test]
    fn test_file_is_not_a_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("README.md");
        std::fs::write(&file, "hello").unwrap();

        let result = SafeCommandExecutor::new(&file);
        assert!(matches!(result, Err(CommandError::InvalidWorkingDirectory(p)) if p == file));
    }

    #[test]
    fn test_rejected_command_rm() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();
        let result = executor.execute("rm", &["-rf", "/"]);
        assert!(
            matches!(result, Err(CommandError::CommandNotAllowed(ref c)) if c == "rm"),
            "rm should be rejected as not in whitelist"
        );
    }

    #[test]
    fn test_output_capture() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();

        let result = executor.execute("git", &["--version"]).unwrap();
        assert!(result.success(), "git --version should succeed");
        assert!(result.stdout.starts_with("git version"));
    }

    #[test]
    fn test_runs_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();

        assert!(executor.execute("git", &["init", "-q"]).unwrap().success());
        assert!(temp_dir.path().join(".git").is_dir());

        let result = executor.execute("git", &["rev-parse", "--show-toplevel"]).unwrap();
        assert_eq!(
            std::fs::canonicalize(result.stdout.trim()).unwrap(),
            std::fs::canonicalize(temp_dir.path()).unwrap()
        );
    }

    #[test]
    fn test_failure_captures_stderr_and_status() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();

        // Not a repository yet
        let result = executor.execute("git", &["rev-parse", "HEAD"]).unwrap();
        assert!(!result.success());
        assert!(result.status > 0);
        assert!(result.stderr.contains("not a git repository"));
    }

    #[test]
    fn test_clean_commit_reports_marker_on_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();
        assert!(executor.execute("git", &["init", "-q"]).unwrap().success());

        let result = executor
            .execute(
                "git",
                &[
                    "-c",
                    "user.name=Test",
                    "-c",
                    "user.email=test@example.com",
                    "commit",
                    "-m",
                    "empty",
                ],
            )
            .unwrap();
        assert!(!result.success());
        assert!(result.stdout.contains(crate::git::NOTHING_TO_COMMIT_MARKER));
    }

    #[test]
    fn test_rejected_command_through_runner_trait() {
        let temp_dir = TempDir::new().unwrap();
        let executor = SafeCommandExecutor::new(temp_dir.path()).unwrap();
        let result = executor.run("sh", &["-c", "git push"]);
        assert!(matches!(result, Err(CommandError::CommandNotAllowed(_))));
    }
}
