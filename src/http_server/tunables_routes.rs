//! Tunables HTTP Routes
//!
//! - `GET /admin/tunables` - every collection and its current values
//! - `PUT`/`DELETE /admin/tunables/{id}` - merge into or remove from `{id}`
//!
//! Every other method on `/admin/tunables/{id}` reaches the handler too, so
//! the 405 carries the same error body and `Allow` header.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method},
    response::Response,
    routing::{any, get},
    Json, Router,
};

use crate::admin::{build_response, CollectionsResponse, TunablesAdmin, TUNABLES_PATH};

/// Create tunables routes
pub fn tunables_routes(admin: TunablesAdmin) -> Router {
    Router::new()
        .route(TUNABLES_PATH, get(list_handler))
        .route(&format!("{}/:id", TUNABLES_PATH), any(update_handler))
        .with_state(admin)
}

async fn list_handler(State(admin): State<TunablesAdmin>) -> Json<CollectionsResponse> {
    Json(admin.snapshot())
}

async fn update_handler(
    State(admin): State<TunablesAdmin>,
    Path(id): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    build_response(admin.handle(&method, &id, &headers, &body))
}
