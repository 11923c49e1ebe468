//! # Request Validation
//!
//! Method and content-type preconditions. Both run before the body is
//! looked at, method first.

use std::fmt;

use axum::http::{header, HeaderMap, Method};

use super::errors::{AdminError, AdminResult};

/// Value of the `Allow` header on 405 responses
pub const ALLOWED_METHODS: &str = "PUT, DELETE";

/// The two mutating methods the endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    /// Merge-upsert
    Put,
    /// Selective remove
    Delete,
}

impl UpdateMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMethod::Put => "PUT",
            UpdateMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_method(method: &Method) -> AdminResult<UpdateMethod> {
    if method == Method::PUT {
        Ok(UpdateMethod::Put)
    } else if method == Method::DELETE {
        Ok(UpdateMethod::Delete)
    } else {
        Err(AdminError::MethodNotAllowed(method.to_string()))
    }
}

/// True for `application/json` and `application/*+json`, ignoring
/// parameters and case.
pub fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

pub fn validate_content_type(headers: &HeaderMap) -> AdminResult<()> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Err(AdminError::UnsupportedMediaType("none".to_string()));
    };

    match value.to_str() {
        Ok(content_type) if is_json_content_type(content_type) => Ok(()),
        Ok(content_type) => Err(AdminError::UnsupportedMediaType(content_type.to_string())),
        Err(_) => Err(AdminError::UnsupportedMediaType(
            "<non-ascii header>".to_string(),
        )),
    }
}

/// Method check, then content-type check
pub fn validate(method: &Method, headers: &HeaderMap) -> AdminResult<UpdateMethod> {
    let method = validate_method(method)?;
    validate_content_type(headers)?;
    Ok(method)
}
