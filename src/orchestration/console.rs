//! Console presentation for publishing runs
//!
//! All functions write to a caller-supplied writer so output can be
//! captured in tests.

use crate::core::config::PublisherConfig;
use crate::core::error::PublishError;
use crate::git::CommitOutcome;
use std::io::{self, Write};

pub fn print_banner<W: Write>(out: &mut W, config: &PublisherConfig) -> io::Result<()> {
    writeln!(out, "\n🚀 git-publisher\n")?;
    writeln!(out, "  Repository: {}", config.working_dir.display())?;
    writeln!(out, "  Target:     {}", config.target_ref())?;
    writeln!(out, "  Commit:     {}", config.commit_subject())
}

/// Step header, e.g. `📦 Staging changes...`, preceded by a blank line
pub fn print_step<W: Write>(out: &mut W, marker: &str, message: &str) -> io::Result<()> {
    writeln!(out, "\n{} {}", marker, message)
}

pub fn print_ok<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "  ✅ {}", message)
}

pub fn print_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "  ⚠️  {}", message)
}

/// Tool output, indented under the current step
pub fn print_tool_output<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for line in text.lines() {
        writeln!(out, "    {}", line)?;
    }
    Ok(())
}

pub fn print_success_summary<W: Write>(
    out: &mut W,
    config: &PublisherConfig,
    outcome: &CommitOutcome,
) -> io::Result<()> {
    writeln!(out, "\n🎉 Publish complete!\n")?;

    match outcome {
        CommitOutcome::Committed(summary) => match (&summary.short_hash, &summary.branch) {
            (Some(hash), Some(branch)) => writeln!(out, "  Commit: {} on {}", hash, branch)?,
            (Some(hash), None) => writeln!(out, "  Commit: {}", hash)?,
            _ => writeln!(out, "  Commit: created")?,
        },
        CommitOutcome::NothingToCommit => {
            writeln!(out, "  Commit: none (working tree was already clean)")?
        }
    }
    writeln!(out, "  Pushed: {}", config.target_ref())?;

    writeln!(
        out,
        "\n⏳ The site rebuilds automatically, usually within {}.",
        config.rebuild_estimate
    )?;
    writeln!(out, "\n👉 Once it is live, verify manually:")?;
    writeln!(out, "  1. Open {}", config.target_url)?;
    writeln!(
        out,
        "  2. Sign in with {} / {}",
        config.demo_credentials.username, config.demo_credentials.password
    )?;
    writeln!(out, "  3. Confirm you land on the dashboard\n")
}

/// Failure report written by the top-level handler
pub fn print_failure<W: Write>(err: &mut W, error: &PublishError) -> io::Result<()> {
    writeln!(err, "\n❌ Error [{}]", error.code())?;
    writeln!(err, "{}", error)?;

    let actions = error.suggested_actions();
    if !actions.is_empty() {
        writeln!(err, "\nSuggested actions:")?;
        for action in actions {
            writeln!(err, "  - {}", action)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CommitSummary;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_names_target() {
        let config = PublisherConfig::default();
        let text = render(|out| print_banner(out, &config));

        assert!(text.contains("/srv/demo-portal"));
        assert!(text.contains("origin/main"));
        assert!(text.contains("CRITICAL:"));
    }

    #[test]
    fn test_tool_output_is_indented() {
        let text = render(|out| print_tool_output(out, "[main abc] msg\n 1 file changed\n"));
        assert_eq!(text, "    [main abc] msg\n     1 file changed\n");
    }

    #[test]
    fn test_summary_contains_follow_up() {
        let config = PublisherConfig::default();
        let outcome = CommitOutcome::Committed(CommitSummary::parse("[main abc1234] x"));
        let text = render(|out| print_success_summary(out, &config, &outcome));

        assert!(text.contains("Publish complete"));
        assert!(text.contains("Commit: abc1234 on main"));
        assert!(text.contains("2-3 minutes"));
        assert!(text.contains("https://demo-portal.vercel.app/login"));
        assert!(text.contains("demo@example.com / demo1234"));
    }

    #[test]
    fn test_summary_without_parsed_header() {
        let config = PublisherConfig::default();
        let outcome = CommitOutcome::Committed(CommitSummary::parse("done"));
        let text = render(|out| print_success_summary(out, &config, &outcome));
        assert!(text.contains("Commit: created"));
    }

    #[test]
    fn test_step_starts_with_blank_line() {
        let text = render(|out| print_step(out, "📦", "Staging changes..."));
        assert_eq!(text, "\n📦 Staging changes...\n");
    }

    #[test]
    fn test_summary_for_skipped_commit() {
        let config = PublisherConfig::default();
        let text = render(|out| print_success_summary(out, &config, &CommitOutcome::NothingToCommit));
        assert!(text.contains("working tree was already clean"));
    }

    #[test]
    fn test_failure_lists_code_and_actions() {
        let error = PublishError::StageFailed {
            status: 128,
            diagnostic: "fatal: not a git repository".to_string(),
        };
        let text = render(|err| print_failure(err, &error));

        assert!(text.contains("❌ Error [STAGE_FAILED]"));
        assert!(text.contains("fatal: not a git repository"));
        assert!(text.contains("Suggested actions:"));
    }
}
