//! Error handling for git-publisher
//!
//! Every failure of a publishing run ends up as a [`PublishError`]. The
//! "nothing to commit" case is not an error and never appears here.

use crate::core::state_machine::PublishState;
use crate::security::CommandError;
use thiserror::Error;

/// Publishing step an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    Stage,
    Commit,
    Push,
}

impl PublishStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        }
    }
}

/// Main error type for publishing operations
#[derive(Error, Debug)]
pub enum PublishError {
    // Step failures
    #[error("git add failed (exit {status}):\n{diagnostic}")]
    StageFailed { status: i32, diagnostic: String },

    #[error("git commit failed (exit {status}):\n{diagnostic}")]
    CommitFailed { status: i32, diagnostic: String },

    #[error("git push {remote} {branch} failed (exit {status}):\n{diagnostic}")]
    PushFailed {
        remote: String,
        branch: String,
        status: i32,
        diagnostic: String,
    },

    // Unexpected errors
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Invalid state transition: {from:?} → {to:?}")]
    InvalidTransition { from: PublishState, to: PublishState },

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Console output failed: {0}")]
    Console(#[from] std::io::Error),
}

impl PublishError {
    /// Get the publishing step that failed, if the error came from one
    pub fn step(&self) -> Option<PublishStep> {
        match self {
            Self::StageFailed { .. } => Some(PublishStep::Stage),
            Self::CommitFailed { .. } => Some(PublishStep::Commit),
            Self::PushFailed { .. } => Some(PublishStep::Push),
            _ => None,
        }
    }

    /// Get suggested actions for this error
    pub fn suggested_actions(&self) -> Vec<&'static str> {
        match self {
            Self::StageFailed { .. } => vec![
                "Check that the working directory is a git repository",
                "Remove a stale .git/index.lock if no other git process is running",
            ],
            Self::CommitFailed { .. } => vec![
                "Check git's output above",
                "Make sure user.name and user.email are configured",
                "Check for failing pre-commit hooks",
            ],
            Self::PushFailed { .. } => vec![
                "Pull and integrate remote changes, then publish again",
                "Check network access and remote credentials",
            ],
            Self::InvalidConfig { .. } => vec!["Fix the publisher constants and rebuild"],
            Self::InvalidTransition { .. } => vec!["Report this as a bug"],
            Self::Command(CommandError::InvalidWorkingDirectory(_)) => {
                vec!["Check that the repository directory exists"]
            }
            Self::Command(_) => vec!["Check that git is installed and on PATH"],
            Self::Console(_) => vec!["Check that stdout is writable"],
        }
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::StageFailed { .. } => "STAGE_FAILED",
            Self::CommitFailed { .. } => "COMMIT_FAILED",
            Self::PushFailed { .. } => "PUSH_FAILED",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Command(_) => "COMMAND_ERROR",
            Self::Console(_) => "CONSOLE_ERROR",
        }
    }
}
