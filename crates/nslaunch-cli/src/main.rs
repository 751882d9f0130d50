//! # nslaunch
//!
//! Runs a command inside a new user namespace, with its standard streams
//! connected to ours, and exits non-zero unless the command succeeds.

mod cli;

use clap::Parser;
use nslaunch_common::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::execute(cli)
}
