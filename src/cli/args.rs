//! CLI argument definitions using clap
//!
//! Commands:
//! - idxadvisor init --config <path>
//! - idxadvisor run --config <path>
//! - idxadvisor inspect --sql <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// idxadvisor - A workload-driven index advisor for PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "idxadvisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the data directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./advisor.json")]
        config: PathBuf,
    },

    /// Execute one recommendation cycle and exit
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./advisor.json")]
        config: PathBuf,
    },

    /// Print the index candidates extracted from one query text
    Inspect {
        /// Query text to scan
        #[arg(long)]
        sql: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
