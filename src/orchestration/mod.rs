//! Orchestration layer for publishing
//!
//! Sequencing of the git steps, console output, and the top-level failure
//! boundary.

pub mod console;
pub mod publisher;

// Re-export main types for convenience
pub use publisher::{
    EXIT_FAILURE, EXIT_SUCCESS, PublishReport, Publisher, report_failure, run_to_exit_code,
};
