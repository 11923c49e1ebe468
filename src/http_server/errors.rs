//! # Server Errors

use std::io;

use thiserror::Error;

use crate::admin::AdminError;
use crate::tunable::TunableError;

/// Result type for server setup and lifecycle
pub type ServerResult<T> = Result<T, ServerError>;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid tunables for collection {id}: {source}")]
    Seed {
        id: String,
        #[source]
        source: AdminError,
    },

    #[error("Failed to install log subscriber: {0}")]
    Logging(String),

    #[error("Invalid socket address: {0}")]
    InvalidAddress(String),

    #[error("{0}")]
    Tunable(#[from] TunableError),

    #[error("Server I/O error: {0}")]
    Io(#[from] io::Error),
}
