//! Test doubles shared by unit tests

use crate::core::traits::{CommandResult, CommandRunner};
use crate::security::CommandError;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Runner that replays canned results in order and records every call.
///
/// Once the script is exhausted, calls fail with `ExecutionFailed` using
/// the configured message.
pub struct ScriptedRunner {
    results: RefCell<VecDeque<CommandResult>>,
    calls: RefCell<Vec<Vec<String>>>,
    exhausted_message: String,
}

impl ScriptedRunner {
    pub fn new(results: Vec<CommandResult>) -> Self {
        Self::failing_after(results, "no scripted result left")
    }

    pub fn failing_after(results: Vec<CommandResult>, message: &str) -> Self {
        Self {
            results: RefCell::new(results.into()),
            calls: RefCell::new(Vec::new()),
            exhausted_message: message.to_string(),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// git subcommands invoked so far, e.g. `["add", "commit"]`
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| call.get(1).cloned())
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, CommandError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        self.results
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CommandError::ExecutionFailed(self.exhausted_message.clone()))
    }
}
