//! # Admin Responses
//!
//! Maps a request outcome to a status code and JSON body.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::tunable::Tunable;

use super::errors::{AdminError, AdminResult};
use super::validator::ALLOWED_METHODS;

/// Body of a successful PUT or DELETE
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResponse {
    pub id: String,
    pub method: &'static str,
    pub applied: usize,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<AdminError> for ErrorResponse {
    fn from(err: AdminError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let needs_allow = matches!(self, AdminError::MethodNotAllowed(_));

        let mut response = (status, Json(ErrorResponse::from(self))).into_response();
        if needs_allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }
        response
    }
}

pub fn build_response(outcome: AdminResult<UpdateResponse>) -> Response {
    match outcome {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// One tunable in the read-only listing
#[derive(Debug, Clone, Serialize)]
pub struct TunableView {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: Value,
    pub updated_at: String,
}

impl From<&Tunable> for TunableView {
    fn from(tunable: &Tunable) -> Self {
        Self {
            id: tunable.id.clone(),
            type_name: tunable.type_name.clone(),
            value: tunable.value.to_json(),
            updated_at: tunable.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub id: String,
    pub tunables: Vec<TunableView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionsResponse {
    pub collections: Vec<CollectionView>,
    pub total: usize,
}
