//! State machine for tracking a publishing run
//!
//! ```text
//! Initial → Staging → Committing → Pushing → Done
//!              │           │           │
//!              └───────────┴───────────┴──→ Failed
//! ```
//!
//! Nothing is persisted: a run either finishes or fails, and the next run
//! starts from `Initial` again.

use crate::core::error::PublishError;
use chrono::{DateTime, Utc};

/// Publishing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Initial,
    Staging,
    Committing,
    Pushing,
    Done,
    Failed,
}

impl PublishState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Staging => "STAGING",
            Self::Committing => "COMMITTING",
            Self::Pushing => "PUSHING",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        }
    }

    /// Check if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Check if `self → to` is a legal edge
    pub fn can_transition_to(&self, to: PublishState) -> bool {
        match (self, to) {
            (Self::Initial, Self::Staging)
            | (Self::Staging, Self::Committing)
            | (Self::Committing, Self::Pushing)
            | (Self::Pushing, Self::Done) => true,
            (from, Self::Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

/// State transition
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransition {
    pub from: PublishState,
    pub to: PublishState,
    pub timestamp: DateTime<Utc>,
    /// Why the transition happened, when it is not the plain happy path
    pub note: Option<String>,
}

/// State machine for tracking the stage → commit → push sequence
#[derive(Debug, Clone)]
pub struct PublishStateMachine {
    current_state: PublishState,
    transitions: Vec<StateTransition>,
}

impl Default for PublishStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: PublishState::Initial,
            transitions: Vec::new(),
        }
    }

    /// Transition to a new state
    pub fn transition(
        &mut self,
        to: PublishState,
        note: Option<&str>,
    ) -> Result<(), PublishError> {
        if !self.current_state.can_transition_to(to) {
            return Err(PublishError::InvalidTransition {
                from: self.current_state,
                to,
            });
        }

        tracing::debug!(from = self.current_state.as_str(), to = to.as_str(), note, "state transition");

        self.transitions.push(StateTransition {
            from: self.current_state,
            to,
            timestamp: Utc::now(),
            note: note.map(str::to_string),
        });
        self.current_state = to;

        Ok(())
    }

    /// Move to `Failed` unless the run already ended
    pub fn fail(&mut self, reason: &str) {
        if !self.current_state.is_terminal() {
            // Failed is reachable from every non-terminal state
            let _ = self.transition(PublishState::Failed, Some(reason));
        }
    }

    /// Get current state
    pub fn get_state(&self) -> PublishState {
        self.current_state
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Get elapsed milliseconds between the first and last transition
    pub fn get_elapsed_time(&self) -> i64 {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_milliseconds(),
            _ => 0,
        }
    }

    /// Get transition history as human-readable string
    pub fn get_history(&self) -> String {
        self.transitions
            .iter()
            .map(|t| {
                let note = t
                    .note
                    .as_deref()
                    .map(|n| format!(" ({})", n))
                    .unwrap_or_default();
                format!(
                    "{}: {:?} → {:?}{}",
                    t.timestamp.to_rfc3339(),
                    t.from,
                    t.to,
                    note
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
