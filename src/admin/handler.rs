//! # Tunables Admin Handler
//!
//! Evaluation order, each stage short-circuiting:
//!
//! 1. method (PUT/DELETE only)
//! 2. content-type (JSON only)
//! 3. body decode
//! 4. collection lookup
//! 5. merge or remove

use std::sync::Arc;

use axum::http::{HeaderMap, Method};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::observability::AdminMetrics;
use crate::tunable::{CollectionRegistry, DecoderRegistry};

use super::codec::decode_request;
use super::errors::{AdminError, AdminResult};
use super::merge::{self, MergeOutcome};
use super::resolver::resolve_collection;
use super::response::{CollectionView, CollectionsResponse, TunableView, UpdateResponse};
use super::validator::validate;

/// Shared state of the tunables admin endpoint
#[derive(Clone)]
pub struct TunablesAdmin {
    registry: Arc<dyn CollectionRegistry>,
    decoders: Arc<DecoderRegistry>,
    metrics: Arc<AdminMetrics>,
}

impl TunablesAdmin {
    /// Handler over `registry` with the built-in decoders
    pub fn new(registry: Arc<dyn CollectionRegistry>) -> Self {
        Self {
            registry,
            decoders: Arc::new(DecoderRegistry::new()),
            metrics: Arc::new(AdminMetrics::new()),
        }
    }

    pub fn with_decoders(mut self, decoders: DecoderRegistry) -> Self {
        self.decoders = Arc::new(decoders);
        self
    }

    pub fn decoders(&self) -> &DecoderRegistry {
        &self.decoders
    }

    pub fn metrics(&self) -> &Arc<AdminMetrics> {
        &self.metrics
    }

    /// Handle one PUT/DELETE request against `/admin/tunables/{id}`.
    /// `id` is the already percent-decoded path segment.
    pub fn handle(
        &self,
        method: &Method,
        id: &str,
        headers: &HeaderMap,
        body: &[u8],
    ) -> AdminResult<UpdateResponse> {
        let request_id = Uuid::new_v4();
        let span = info_span!("admin_tunables", %request_id, %method, collection = %id);
        let _enter = span.enter();

        self.metrics.increment_requests();

        match self.evaluate(method, id, headers, body) {
            Ok((response, outcome)) => {
                self.metrics.record_success(&outcome);
                info!(
                    applied = outcome.applied,
                    created = outcome.created,
                    updated = outcome.updated,
                    removed = outcome.removed,
                    "tunables updated"
                );
                Ok(response)
            }
            Err(err) => {
                self.metrics.record_rejection(&err);
                match &err {
                    AdminError::ApplyFailed { .. } => {
                        warn!(kind = err.kind(), error = %err, "tunables update failed")
                    }
                    _ => info!(kind = err.kind(), error = %err, "tunables request rejected"),
                }
                Err(err)
            }
        }
    }

    fn evaluate(
        &self,
        method: &Method,
        id: &str,
        headers: &HeaderMap,
        body: &[u8],
    ) -> AdminResult<(UpdateResponse, MergeOutcome)> {
        let method = validate(method, headers)?;
        let request = decode_request(body, &self.decoders)?;
        let collection = resolve_collection(self.registry.as_ref(), id)?;

        let outcome = merge::apply(collection.as_ref(), &request, method).map_err(|failure| {
            self.metrics.record_mutations(&failure.outcome);
            AdminError::ApplyFailed {
                id: id.to_string(),
                reason: format!(
                    "{} at tunable {:?} (applied {} of {})",
                    failure.error,
                    failure.failed_id,
                    failure.outcome.applied,
                    request.len()
                ),
            }
        })?;

        let response = UpdateResponse {
            id: id.to_string(),
            method: method.as_str(),
            applied: outcome.applied,
        };
        Ok((response, outcome))
    }

    /// Every enumerable collection with its current entries
    pub fn snapshot(&self) -> CollectionsResponse {
        let collections: Vec<CollectionView> = self
            .registry
            .ids()
            .into_iter()
            .filter_map(|id| {
                let collection = self.registry.resolve(&id)?;
                let tunables = collection.entries().iter().map(TunableView::from).collect();
                Some(CollectionView { id, tunables })
            })
            .collect();

        CollectionsResponse {
            total: collections.len(),
            collections,
        }
    }
}
