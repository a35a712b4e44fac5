//! Publisher - stage, commit and push the working tree
//!
//! Runs the sequence once, strictly in order:
//! - `git add -A` (must succeed)
//! - `git commit -m <message>` ("nothing to commit" is downgraded to a warning)
//! - `git push <remote> <branch>` (must succeed)
//!
//! and prints a follow-up summary on success. Failures are returned to the
//! caller, which reports them at a single boundary ([`run_to_exit_code`]).

use super::console;
use crate::core::config::PublisherConfig;
use crate::core::error::PublishError;
use crate::core::state_machine::{PublishState, PublishStateMachine, StateTransition};
use crate::core::traits::CommandRunner;
use crate::git::{CommitFailure, CommitOutcome, CommitSummary, GitClient, classify_commit_failure};
use std::io::Write;

/// Exit code for a completed run, including the nothing-to-commit path
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any failed run
pub const EXIT_FAILURE: i32 = 1;

/// Report returned after a successful run
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub commit: CommitOutcome,
    pub remote: String,
    pub branch: String,
    /// Milliseconds from the first to the last state transition
    pub duration: u64,
    pub transitions: Vec<StateTransition>,
}

/// Stage/commit/push orchestrator
pub struct Publisher<R> {
    config: PublisherConfig,
    git: GitClient<R>,
    state_machine: PublishStateMachine,
}

impl<R: CommandRunner> Publisher<R> {
    /// Create a publisher. `runner` must already be bound to
    /// `config.working_dir`.
    pub fn new(config: PublisherConfig, runner: R) -> Self {
        Self {
            config,
            git: GitClient::new(runner),
            state_machine: PublishStateMachine::new(),
        }
    }

    /// Get the state the last run ended in
    pub fn state(&self) -> PublishState {
        self.state_machine.get_state()
    }

    /// Run stage → commit → push, writing progress to `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<PublishReport, PublishError> {
        self.state_machine = PublishStateMachine::new();

        let commit = match self.run_steps(out) {
            Ok(commit) => commit,
            Err(e) => {
                self.state_machine.fail(e.code());
                tracing::debug!(history = %self.state_machine.get_history(), "publish failed");
                return Err(e);
            }
        };

        self.state_machine.transition(PublishState::Done, None)?;
        tracing::debug!(history = %self.state_machine.get_history(), "publish finished");

        Ok(PublishReport {
            commit,
            remote: self.config.remote.clone(),
            branch: self.config.branch.clone(),
            duration: u64::try_from(self.state_machine.get_elapsed_time()).unwrap_or(0),
            transitions: self.state_machine.transitions().to_vec(),
        })
    }

    fn run_steps<W: Write>(&mut self, out: &mut W) -> Result<CommitOutcome, PublishError> {
        console::print_banner(out, &self.config)?;

        self.stage(out)?;
        let commit = self.commit(out)?;
        self.push(out, &commit)?;

        // Printed before Done so a failed write still ends the run as Failed
        console::print_success_summary(out, &self.config, &commit)?;

        Ok(commit)
    }

    fn stage<W: Write>(&mut self, out: &mut W) -> Result<(), PublishError> {
        self.state_machine.transition(PublishState::Staging, None)?;
        console::print_step(out, "📦", "Staging changes...")?;

        let result = self.git.stage_all()?;
        if !result.success() {
            return Err(PublishError::StageFailed {
                status: result.status,
                diagnostic: result.diagnostic(),
            });
        }

        console::print_ok(out, "Changes staged")?;
        Ok(())
    }

    fn commit<W: Write>(&mut self, out: &mut W) -> Result<CommitOutcome, PublishError> {
        self.state_machine.transition(PublishState::Committing, None)?;
        console::print_step(out, "📝", "Committing changes...")?;

        let result = self.git.commit(&self.config.commit_message)?;
        if result.success() {
            let summary = CommitSummary::parse(&result.stdout);
            console::print_tool_output(out, &summary.raw)?;
            console::print_ok(out, "Changes committed")?;
            return Ok(CommitOutcome::Committed(summary));
        }

        match classify_commit_failure(&result.stdout) {
            CommitFailure::Benign => {
                tracing::info!(status = result.status, "commit skipped, nothing to commit");
                console::print_warning(out, "Commit skipped: nothing to commit, working tree clean")?;
                Ok(CommitOutcome::NothingToCommit)
            }
            CommitFailure::Fatal => Err(PublishError::CommitFailed {
                status: result.status,
                diagnostic: result.diagnostic(),
            }),
        }
    }

    fn push<W: Write>(&mut self, out: &mut W, commit: &CommitOutcome) -> Result<(), PublishError> {
        let note = commit.is_skipped().then_some("nothing to commit");
        self.state_machine.transition(PublishState::Pushing, note)?;

        let target = self.config.target_ref();
        console::print_step(out, "🚀", &format!("Pushing to {}...", target))?;

        let result = self.git.push(&self.config.remote, &self.config.branch)?;
        if !result.success() {
            return Err(PublishError::PushFailed {
                remote: self.config.remote.clone(),
                branch: self.config.branch.clone(),
                status: result.status,
                diagnostic: result.diagnostic(),
            });
        }

        console::print_ok(out, &format!("Pushed to {}", target))?;
        Ok(())
    }
}

/// Top-level failure boundary.
///
/// Runs the publisher, prints any failure to `err` and maps the outcome to a
/// process exit code.
pub fn run_to_exit_code<R, W, E>(publisher: &mut Publisher<R>, out: &mut W, err: &mut E) -> i32
where
    R: CommandRunner,
    W: Write,
    E: Write,
{
    match publisher.run(out) {
        Ok(report) => {
            tracing::info!(duration_ms = report.duration, skipped = report.commit.is_skipped(), "published");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_failure(err, &e);
            EXIT_FAILURE
        }
    }
}

/// Print a failure report. A failing writer is ignored: the exit code still
/// carries the failure.
pub fn report_failure<E: Write>(err: &mut E, error: &PublishError) {
    tracing::debug!(code = error.code(), step = error.step().map(|s| s.as_str()), "publish failed");
    let _ = console::print_failure(err, error);
}
