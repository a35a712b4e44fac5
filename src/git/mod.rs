//! git invocation and result interpretation

pub mod client;
pub mod commit;

pub use client::GitClient;
pub use commit::{
    CommitFailure, CommitOutcome, CommitSummary, NOTHING_TO_COMMIT_MARKER,
    classify_commit_failure,
};
