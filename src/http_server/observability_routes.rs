//! Observability HTTP Routes
//!
//! Health check and admin counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::{AdminMetrics, AdminMetricsSnapshot};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Admin counters as JSON
pub fn metrics_routes(metrics: Arc<AdminMetrics>) -> Router {
    Router::new()
        .route("/admin/metrics.json", get(metrics_handler))
        .with_state(metrics)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(metrics): State<Arc<AdminMetrics>>) -> Json<AdminMetricsSnapshot> {
    Json(metrics.snapshot())
}
