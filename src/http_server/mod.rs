//! # Admin HTTP Server
//!
//! Serves the tunables admin endpoint over axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/admin/metrics.json` - Admin counters
//! - `/admin/tunables` - List collections (GET)
//! - `/admin/tunables/{id}` - Merge (PUT) or remove (DELETE) tunables

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod tunables_routes;

pub use config::ServerConfig;
pub use errors::{ServerError, ServerResult};
pub use server::{build_router, seed_registry, AdminServer};
