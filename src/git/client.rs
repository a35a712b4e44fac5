//! The three git invocations used for publishing

use crate::core::traits::{CommandResult, CommandRunner};
use crate::security::CommandError;

const GIT: &str = "git";

/// Thin wrapper issuing git commands through a [`CommandRunner`].
///
/// Results are returned as-is; deciding what a non-zero status means is up
/// to the caller.
#[derive(Debug)]
pub struct GitClient<R> {
    runner: R,
}

impl<R: CommandRunner> GitClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `git add -A`
    pub fn stage_all(&self) -> Result<CommandResult, CommandError> {
        self.git(&["add", "-A"])
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<CommandResult, CommandError> {
        self.git(&["commit", "-m", message])
    }

    /// `git push <remote> <branch>`
    pub fn push(&self, remote: &str, branch: &str) -> Result<CommandResult, CommandError> {
        self.git(&["push", remote, branch])
    }

    fn git(&self, args: &[&str]) -> Result<CommandResult, CommandError> {
        // Only the subcommand: the commit message is long and multi-line
        let subcommand = args.first().copied().unwrap_or_default();
        tracing::debug!(subcommand, "running git");

        let result = self.runner.run(GIT, args)?;

        tracing::debug!(
            subcommand,
            status = result.status,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "git exited"
        );
        Ok(result)
    }
}
