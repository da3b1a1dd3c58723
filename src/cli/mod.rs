//! CLI module for idxadvisor
//!
//! Provides command-line interface for:
//! - init: Write a default configuration and create the data directory
//! - run: Execute one recommendation cycle
//! - inspect: One-shot candidate extraction for a query text

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, Config};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
