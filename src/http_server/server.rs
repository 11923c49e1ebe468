//! # HTTP Server
//!
//! Combines the tunables, metrics and health routers and seeds the registry
//! from configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::admin::{decode_descriptors, merge, AdminError, TunablesAdmin, UpdateMethod};
use crate::tunable::{DecoderRegistry, TunableRegistry};

use super::config::ServerConfig;
use super::errors::{ServerError, ServerResult};
use super::observability_routes::{health_routes, metrics_routes};
use super::tunables_routes::tunables_routes;

/// Tunables admin HTTP server
pub struct AdminServer {
    config: ServerConfig,
    registry: Arc<TunableRegistry>,
    admin: TunablesAdmin,
}

impl AdminServer {
    /// Create a server with a fresh registry seeded from `config`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_registry(config, Arc::new(TunableRegistry::new()))
    }

    /// Create a server over an existing registry, seeding it from `config`
    pub fn with_registry(config: ServerConfig, registry: Arc<TunableRegistry>) -> ServerResult<Self> {
        let admin = TunablesAdmin::new(registry.clone());
        seed_registry(&config, &registry, admin.decoders())?;

        Ok(Self {
            config,
            registry,
            admin,
        })
    }

    pub fn registry(&self) -> &Arc<TunableRegistry> {
        &self.registry
    }

    pub fn admin(&self) -> &TunablesAdmin {
        &self.admin
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(&self) -> Router {
        build_router(self.admin.clone())
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> ServerResult<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.config.socket_addr()))?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            %addr,
            collections = self.registry.len(),
            "tunables admin listening"
        );

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Build the combined router
pub fn build_router(admin: TunablesAdmin) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(metrics_routes(admin.metrics().clone()))
        .merge(tunables_routes(admin))
        .layer(TraceLayer::new_for_http())
}

/// Register every configured collection and PUT its initial tunables.
/// Returns the number of tunables seeded.
pub fn seed_registry(
    config: &ServerConfig,
    registry: &TunableRegistry,
    decoders: &DecoderRegistry,
) -> ServerResult<usize> {
    let mut seeded = 0;

    for (id, descriptors) in &config.collections {
        let seed_error = |source: AdminError| ServerError::Seed {
            id: id.clone(),
            source,
        };

        let request = decode_descriptors(descriptors.clone(), decoders).map_err(seed_error)?;
        let map = registry.get_or_create(id)?;

        let outcome = merge::apply(map.as_ref(), &request, UpdateMethod::Put).map_err(|failure| {
            seed_error(AdminError::ApplyFailed {
                id: id.clone(),
                reason: failure.error.to_string(),
            })
        })?;

        info!(collection = %id, tunables = outcome.applied, "collection seeded");
        seeded += outcome.applied;
    }

    Ok(seeded)
}
