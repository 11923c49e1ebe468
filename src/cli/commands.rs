//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::http_server::{AdminServer, ServerConfig};
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Check { config } => check(&config),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => Ok(ServerConfig::default()),
    }
}

/// Start the admin server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_logging(&config.log_filter, config.log_json)?;

    let server = AdminServer::new(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;
    Ok(())
}

/// Summary printed by `check`
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub address: String,
    pub collections: Vec<CollectionSummary>,
}

#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    pub id: String,
    pub tunables: usize,
}

/// Load a config, seed a throwaway registry from it, and report what it holds
pub fn check_config(config_path: &Path) -> CliResult<CheckSummary> {
    let config = ServerConfig::load(config_path)?;
    let server = AdminServer::new(config)?;

    let collections = server
        .admin()
        .snapshot()
        .collections
        .into_iter()
        .map(|c| CollectionSummary {
            id: c.id,
            tunables: c.tunables.len(),
        })
        .collect();

    Ok(CheckSummary {
        address: server.socket_addr(),
        collections,
    })
}

/// Validate a config file and print the summary as JSON
pub fn check(config_path: &Path) -> CliResult<()> {
    let summary = check_config(config_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)?;
    Ok(())
}
