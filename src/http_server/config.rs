//! Admin Server Configuration
//!
//! Bind address, logging, and the tunable collections seeded at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::admin::WireDescriptor;

use super::errors::{ServerError, ServerResult};

/// Admin server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 9990)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log filter directives, overridden by RUST_LOG (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON log lines (default: false)
    #[serde(default)]
    pub log_json: bool,

    /// Collections to register at startup, with their initial tunables
    #[serde(default)]
    pub collections: BTreeMap<String, Vec<WireDescriptor>>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9990
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
            log_json: false,
            collections: BTreeMap::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Read a JSON config file
    pub fn load(path: &Path) -> ServerResult<Self> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ServerError::ConfigParse {
            path: display,
            source,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
