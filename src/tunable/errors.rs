//! # Tunable Errors

use thiserror::Error;

/// Result type for tunable operations
pub type TunableResult<T> = Result<T, TunableError>;

/// Tunable errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TunableError {
    #[error("unknown tunable type: {0}")]
    UnknownType(String),

    #[error("invalid value for {type_name}: {reason}")]
    InvalidValue { type_name: String, reason: String },

    #[error("Collection already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TunableError {
    pub(crate) fn invalid(type_name: &str, reason: impl Into<String>) -> Self {
        TunableError::InvalidValue {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn poisoned() -> Self {
        TunableError::Internal("Lock poisoned".into())
    }
}
