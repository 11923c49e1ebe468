//! CLI argument definitions using clap
//!
//! Commands:
//! - tunables-admin serve [--config <path>] [--port <port>]
//! - tunables-admin check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tunables admin - inspect and override runtime tunables over HTTP
#[derive(Parser, Debug)]
#[command(name = "tunables-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the admin HTTP server
    Serve {
        /// Path to configuration file; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a configuration file and print a summary
    Check {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
