//! Command-line definition and dispatch.

use std::ffi::OsString;

use clap::Parser;
use nslaunch_core::namespace::IsolationDirective;

/// Run a command inside a new user namespace.
#[derive(Parser, Debug)]
#[command(name = "nslaunch", version, about, long_about = None)]
pub struct Cli {
    /// Program to run, followed by its arguments. Passed through verbatim.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

/// Launches the requested command and waits for it.
///
/// # Errors
///
/// Returns an error if no command was given, if it cannot be started, or
/// if it does not exit successfully.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(argc = cli.command.len(), "parsed command line");
    nslaunch_runtime::launch(cli.command, IsolationDirective::user())?;
    Ok(())
}
