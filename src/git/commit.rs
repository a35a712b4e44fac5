//! Interpretation of `git commit` results

/// Phrase git prints on stdout when a commit finds nothing staged.
///
/// Matched as an exact, case-sensitive substring. A localized git
/// (`LANG=de_DE`, ...) prints something else and the run is treated as a
/// fatal commit failure.
pub const NOTHING_TO_COMMIT_MARKER: &str = "nothing to commit";

/// How a non-zero `git commit` should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitFailure {
    /// Nothing was staged; publishing continues with the push
    Benign,
    /// Any other failure; publishing stops
    Fatal,
}

/// Classify the output of a failed commit
pub fn classify_commit_failure(output: &str) -> CommitFailure {
    if output.contains(NOTHING_TO_COMMIT_MARKER) {
        CommitFailure::Benign
    } else {
        CommitFailure::Fatal
    }
}

/// Result of the commit step when publishing may continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitSummary),
    NothingToCommit,
}

impl CommitOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::NothingToCommit)
    }
}

/// git's confirmation of a new commit, e.g.
/// `[main abc1234] CRITICAL: Fix login` followed by a stat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub branch: Option<String>,
    pub short_hash: Option<String>,
    /// Full confirmation text, trimmed
    pub raw: String,
}

impl CommitSummary {
    /// Parse the confirmation output. Fields that cannot be found stay `None`.
    pub fn parse(stdout: &str) -> Self {
        let raw = stdout.trim().to_string();

        let header = raw
            .lines()
            .next()
            .and_then(|line| line.strip_prefix('['))
            .and_then(|rest| rest.split_once(']'))
            .map(|(inside, _)| inside);

        // "main abc1234" or "main (root-commit) abc1234"
        let (branch, short_hash) = match header {
            Some(inside) => {
                let mut words = inside.split_whitespace();
                let branch = words.next().map(str::to_string);
                let short_hash = words.last().map(str::to_string);
                (branch, short_hash)
            }
            None => (None, None),
        };

        Self {
            branch,
            short_hash,
            raw,
        }
    }
}
