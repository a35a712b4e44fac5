pub mod core;
pub mod git;
pub mod logging;
pub mod orchestration;
pub mod security;

#[cfg(test)]
mod testing;

pub use crate::core::*;
pub use git::{CommitFailure, CommitOutcome, CommitSummary, GitClient, classify_commit_failure};
pub use orchestration::{
    EXIT_FAILURE, EXIT_SUCCESS, PublishReport, Publisher, report_failure, run_to_exit_code,
};
pub use security::{CommandError, SafeCommandExecutor};
