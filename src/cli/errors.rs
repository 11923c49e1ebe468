//! CLI-specific error types
//!
//! All CLI errors are fatal: printed to stderr, non-zero exit.

use std::fmt;
use std::io;

use crate::http_server::ServerError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, sockets)
    IoError,
    /// Server failed to start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TUNABLES_CLI_CONFIG_ERROR",
            Self::IoError => "TUNABLES_CLI_IO_ERROR",
            Self::ServeFailed => "TUNABLES_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ServerError> for CliError {
    fn from(e: ServerError) -> Self {
        match e {
            ServerError::ConfigRead { .. }
            | ServerError::ConfigParse { .. }
            | ServerError::Seed { .. }
            | ServerError::Tunable(_)
            | ServerError::Logging(_)
            | ServerError::InvalidAddress(_) => Self::config_error(e.to_string()),
            ServerError::Io(_) => Self::serve_failed(e.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "TUNABLES_CLI_CONFIG_ERROR: bad port");
        assert_eq!(err.message(), "bad port");
    }

    #[test]
    fn test_server_error_mapping() {
        let err: CliError = ServerError::InvalidAddress("nowhere".into()).into();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);

        let err: CliError = ServerError::Logging("already set".into()).into();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().contains("already set"));

        let err: CliError =
            ServerError::Io(io::Error::new(io::ErrorKind::AddrInUse, "taken")).into();
        assert_eq!(err.code_str(), "TUNABLES_CLI_SERVE_FAILED");
    }
}
