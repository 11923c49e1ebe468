//! CLI module for the tunables admin server
//!
//! Provides command-line interface for:
//! - serve: run the admin HTTP server
//! - check: validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, check_config, run, run_command, serve, CheckSummary, CollectionSummary};
pub use errors::{CliError, CliErrorCode, CliResult};
