//! # Admin Errors
//!
//! Every way a tunables admin request can terminate early. Messages are
//! user-facing and stable.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type for admin request handling
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Expected Content-Type: application/json, got: {0}")]
    UnsupportedMediaType(String),

    /// Malformed body, wrong shape, unknown type name or bad value
    #[error("Failed to parse JSON: {0}")]
    MalformedJson(String),

    #[error("TunableMap not found for id: {0}")]
    CollectionNotFound(String),

    #[error("Failed to apply tunables to {id}: {reason}")]
    ApplyFailed { id: String, reason: String },
}

impl AdminError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AdminError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AdminError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            AdminError::CollectionNotFound(_) => StatusCode::NOT_FOUND,
            AdminError::ApplyFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable short name, used as a log and metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            AdminError::MethodNotAllowed(_) => "method_not_allowed",
            AdminError::UnsupportedMediaType(_) => "unsupported_media_type",
            AdminError::MalformedJson(_) => "malformed_json",
            AdminError::CollectionNotFound(_) => "collection_not_found",
            AdminError::ApplyFailed { .. } => "apply_failed",
        }
    }
}
