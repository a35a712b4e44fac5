//! git-publisher CLI
//!
//! Stages, commits and pushes the demo portal in one step

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use git_publisher::logging::init_logging;
use git_publisher::{
    EXIT_FAILURE, EXIT_SUCCESS, PublishError, Publisher, PublisherConfig, SafeCommandExecutor, report_failure,
    run_to_exit_code,
};
use std::io;
use std::process;

/// Stage, commit and push the working tree to origin/main
#[derive(Parser)]
#[command(name = "git-publisher")]
#[command(version)]
#[command(about = "Stage, commit and push the working tree to origin/main", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Stage, commit and push (default)
    Publish,

    /// Print the fixed publishing configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("⚠️  {}", e);
    }

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}

impl Cli {
    /// Subcommand to run; publishing when none was given
    fn subcommand(&self) -> Commands {
        self.command.unwrap_or(Commands::Publish)
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.subcommand() {
        Commands::Publish => Ok(publish_command(PublisherConfig::default())),
        Commands::Config => config_command(PublisherConfig::default()),
    }
}

fn publish_command(config: PublisherConfig) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();

    let executor = match prepare(&config) {
        Ok(executor) => executor,
        Err(e) => {
            report_failure(&mut stderr.lock(), &e);
            return EXIT_FAILURE;
        }
    };

    let mut publisher = Publisher::new(config, executor);
    run_to_exit_code(&mut publisher, &mut stdout.lock(), &mut stderr.lock())
}

fn prepare(config: &PublisherConfig) -> Result<SafeCommandExecutor, PublishError> {
    config.validate()?;
    Ok(SafeCommandExecutor::new(&config.working_dir)?)
}

fn config_command(config: PublisherConfig) -> Result<i32> {
    print!("{}", config.to_yaml()?);
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_publishes() {
        let cli = Cli::try_parse_from(["git-publisher"]).unwrap();
        assert_eq!(cli.subcommand(), Commands::Publish);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["git-publisher", "config", "-vv"]).unwrap();
        assert_eq!(cli.subcommand(), Commands::Config);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["git-publisher", "-v", "publish"]).unwrap();
        assert_eq!(cli.subcommand(), Commands::Publish);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_no_overrides_accepted() {
        assert!(Cli::try_parse_from(["git-publisher", "--branch", "dev"]).is_err());
        assert!(Cli::try_parse_from(["git-publisher", "push"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
