//! Diagnostic logging using the `tracing` ecosystem.
//!
//! Progress output for the user goes to stdout through the console writer;
//! log events go to stderr and are quiet unless `-v` or `RUST_LOG` asks for
//! them.
//!
//! ```text
//! -v count:  0=warn  1=info  2=debug  3+=trace
//! RUST_LOG   overrides the count when set
//! ```

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Call once, before publishing.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_for_verbosity(verbose)))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
