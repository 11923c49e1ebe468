//! # Collection Resolution

use std::sync::Arc;

use crate::tunable::{CollectionRegistry, TunableCollection};

use super::errors::{AdminError, AdminResult};

/// Path prefix the admin routes are mounted under
pub const TUNABLES_PATH: &str = "/admin/tunables";

/// Look up `id` in the registry. Never cached: every call asks the registry.
pub fn resolve_collection(
    registry: &dyn CollectionRegistry,
    id: &str,
) -> AdminResult<Arc<dyn TunableCollection>> {
    registry
        .resolve(id)
        .ok_or_else(|| AdminError::CollectionNotFound(id.to_string()))
}
