//! # Collection Registry
//!
//! Process-wide lookup from collection id to tunable collection. The admin
//! handler consults it on every request, so collections registered or
//! dropped at runtime are seen immediately.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use super::errors::{TunableError, TunableResult};
use super::map::{TunableCollection, TunableMap};

/// Lookup capability for tunable collections
pub trait CollectionRegistry: Send + Sync {
    fn resolve(&self, id: &str) -> Option<Arc<dyn TunableCollection>>;

    /// Ids of every collection that can be enumerated, sorted
    fn ids(&self) -> Vec<String>;
}

/// Registry of in-memory tunable maps
#[derive(Debug, Default)]
pub struct TunableRegistry {
    maps: RwLock<HashMap<String, Arc<TunableMap>>>,
}

impl TunableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a map under `id`
    pub fn register(&self, id: impl Into<String>, map: Arc<TunableMap>) -> TunableResult<()> {
        let id = id.into();
        let mut maps = self.maps.write().map_err(|_| TunableError::poisoned())?;
        if maps.contains_key(&id) {
            return Err(TunableError::AlreadyRegistered(id));
        }
        maps.insert(id, map);
        Ok(())
    }

    /// The map registered under `id`, creating an empty one if needed
    pub fn get_or_create(&self, id: &str) -> TunableResult<Arc<TunableMap>> {
        let mut maps = self.maps.write().map_err(|_| TunableError::poisoned())?;
        Ok(Arc::clone(maps.entry(id.to_string()).or_default()))
    }

    pub fn get(&self, id: &str) -> Option<Arc<TunableMap>> {
        self.maps.read().ok()?.get(id).cloned()
    }

    pub fn unregister(&self, id: &str) -> Option<Arc<TunableMap>> {
        self.maps.write().ok()?.remove(id)
    }

    pub fn len(&self) -> usize {
        self.maps.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CollectionRegistry for TunableRegistry {
    fn resolve(&self, id: &str) -> Option<Arc<dyn TunableCollection>> {
        self.get(id).map(|map| map as Arc<dyn TunableCollection>)
    }

    fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .maps
            .read()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }
}

/// Registry backed by a lookup closure.
///
/// A bare lookup cannot enumerate its collections, so `ids` is empty.
pub struct FnRegistry<F> {
    lookup: F,
}

impl<F> FnRegistry<F>
where
    F: Fn(&str) -> Option<Arc<dyn TunableCollection>> + Send + Sync,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> CollectionRegistry for FnRegistry<F>
where
    F: Fn(&str) -> Option<Arc<dyn TunableCollection>> + Send + Sync,
{
    fn resolve(&self, id: &str) -> Option<Arc<dyn TunableCollection>> {
        (self.lookup)(id)
    }

    fn ids(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<F> fmt::Debug for FnRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRegistry").finish_non_exhaustive()
    }
}
