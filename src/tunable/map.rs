//! # Tunable Collections
//!
//! `TunableCollection` is the mutation surface the admin handler consumes.
//! `TunableMap` is the in-process implementation used by the server.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::errors::{TunableError, TunableResult};
use super::value::TunableValue;

/// One current tunable value
#[derive(Debug, Clone, PartialEq)]
pub struct Tunable {
    pub id: String,
    /// Declared type name, as sent by the writer
    pub type_name: String,
    pub value: TunableValue,
    pub updated_at: DateTime<Utc>,
}

/// A mutable, string-keyed store of typed tunable values.
///
/// Each `put`/`remove` must be individually atomic; callers impose no
/// ordering or atomicity across calls.
pub trait TunableCollection: Send + Sync {
    /// Create or overwrite `id`. Returns the entry it replaced, if any.
    fn put(&self, id: &str, type_name: &str, value: TunableValue)
        -> TunableResult<Option<Tunable>>;

    /// Remove `id`. Returns the removed entry; absence is not an error.
    fn remove(&self, id: &str) -> TunableResult<Option<Tunable>>;

    fn get(&self, id: &str) -> Option<Tunable>;

    /// All current entries, sorted by id
    fn entries(&self) -> Vec<Tunable>;
}

/// In-memory tunable collection
#[derive(Debug, Default)]
pub struct TunableMap {
    entries: RwLock<HashMap<String, Tunable>>,
}

impl TunableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `id`, if present
    pub fn value(&self, id: &str) -> Option<TunableValue> {
        self.get(id).map(|t| t.value)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TunableCollection for TunableMap {
    fn put(
        &self,
        id: &str,
        type_name: &str,
        value: TunableValue,
    ) -> TunableResult<Option<Tunable>> {
        let tunable = Tunable {
            id: id.to_string(),
            type_name: type_name.to_string(),
            value,
            updated_at: Utc::now(),
        };

        let mut entries = self.entries.write().map_err(|_| TunableError::poisoned())?;
        Ok(entries.insert(id.to_string(), tunable))
    }

    fn remove(&self, id: &str) -> TunableResult<Option<Tunable>> {
        let mut entries = self.entries.write().map_err(|_| TunableError::poisoned())?;
        Ok(entries.remove(id))
    }

    fn get(&self, id: &str) -> Option<Tunable> {
        self.entries.read().ok()?.get(id).cloned()
    }

    fn entries(&self) -> Vec<Tunable> {
        let mut all: Vec<Tunable> = self
            .entries
            .read()
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
