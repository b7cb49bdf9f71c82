//! Contact Assistant - Main entry point
//!
//! Starts the interactive assistant bot on stdin/stdout.

use anyhow::Result;
use contact_assistant::{repl, Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Log to stderr only so stdout stays a clean command transcript.
    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(log_level = %config.log_level, "configuration loaded");
    info!("starting assistant loop");

    repl::run()?;

    info!("assistant loop finished");
    Ok(())
}
