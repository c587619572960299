//! In-memory key/value store with explicit presence semantics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Mapping from string keys to integer values.
///
/// Absence is never encoded as a sentinel: a key mapped to `0` and a missing
/// key are distinguishable through [`RecordStore::get`] or
/// [`RecordStore::lookup`]. Iteration is ordered by key so that rendered
/// output stays stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    entries: BTreeMap<String, i64>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, overwriting any existing value.
    ///
    /// Returns the previous value when the key was already present.
    pub fn set(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), value);
        if let Some(old) = previous {
            trace!(key = %key, old, new = value, "overwrote record");
        }
        previous
    }

    /// Value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    /// Two-result lookup: `(value, present)`.
    ///
    /// When `present` is false the value is `0` and carries no meaning.
    pub fn lookup(&self, key: &str) -> (i64, bool) {
        match self.get(key) {
            Some(value) => (value, true),
            None => (0, false),
        }
    }

    /// Remove `key`. Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) -> Option<i64> {
        let removed = self.entries.remove(key);
        match removed {
            Some(value) => trace!(key, value, "deleted record"),
            None => trace!(key, "delete of absent key ignored"),
        }
        removed
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>> Extend<(K, i64)> for RecordStore {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
