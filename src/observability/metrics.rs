//! Admin metrics
//!
//! - Counters only, monotonic, reset only on process start
//! - Thread-safe but lock-minimal

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::admin::{AdminError, MergeOutcome};

/// Counters for the tunables admin endpoint
///
/// All counters use Relaxed ordering; readers only need eventual values.
#[derive(Debug, Default)]
pub struct AdminMetrics {
    /// Requests that reached the update handler
    requests: AtomicU64,
    /// Requests answered with 200
    updates_succeeded: AtomicU64,
    method_not_allowed: AtomicU64,
    unsupported_media_type: AtomicU64,
    malformed_json: AtomicU64,
    collection_not_found: AtomicU64,
    apply_failures: AtomicU64,
    /// Individual tunables created or overwritten
    tunables_put: AtomicU64,
    /// Individual tunables removed
    tunables_removed: AtomicU64,
}

impl AdminMetrics {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful batch
    pub fn record_success(&self, outcome: &MergeOutcome) {
        self.updates_succeeded.fetch_add(1, Ordering::Relaxed);
        self.record_mutations(outcome);
    }

    /// Record a rejected request
    pub fn record_rejection(&self, err: &AdminError) {
        let counter = match err {
            AdminError::MethodNotAllowed(_) => &self.method_not_allowed,
            AdminError::UnsupportedMediaType(_) => &self.unsupported_media_type,
            AdminError::MalformedJson(_) => &self.malformed_json,
            AdminError::CollectionNotFound(_) => &self.collection_not_found,
            AdminError::ApplyFailed { .. } => &self.apply_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Count the tunables a batch touched, including a failed batch's prefix
    pub fn record_mutations(&self, outcome: &MergeOutcome) {
        let put = (outcome.created + outcome.updated) as u64;
        self.tunables_put.fetch_add(put, Ordering::Relaxed);
        self.tunables_removed
            .fetch_add(outcome.removed as u64, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> AdminMetricsSnapshot {
        AdminMetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            updates_succeeded: self.updates_succeeded.load(Ordering::Relaxed),
            method_not_allowed: self.method_not_allowed.load(Ordering::Relaxed),
            unsupported_media_type: self.unsupported_media_type.load(Ordering::Relaxed),
            malformed_json: self.malformed_json.load(Ordering::Relaxed),
            collection_not_found: self.collection_not_found.load(Ordering::Relaxed),
            apply_failures: self.apply_failures.load(Ordering::Relaxed),
            tunables_put: self.tunables_put.load(Ordering::Relaxed),
            tunables_removed: self.tunables_removed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminMetricsSnapshot {
    pub requests: u64,
    pub updates_succeeded: u64,
    pub method_not_allowed: u64,
    pub unsupported_media_type: u64,
    pub malformed_json: u64,
    pub collection_not_found: u64,
    pub apply_failures: u64,
    pub tunables_put: u64,
    pub tunables_removed: u64,
}

impl AdminMetricsSnapshot {
    /// Requests rejected for any reason
    pub fn rejected(&self) -> u64 {
        self.method_not_allowed
            + self.unsupported_media_type
            + self.malformed_json
            + self.collection_not_found
            + self.apply_failures
    }
}
