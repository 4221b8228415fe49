//! Mirrored values
//!
//! Explicit key → value map standing in for values attached directly onto
//! the connection.

use std::collections::HashMap;

use serde_json::Value;

use crate::key::Key;

use super::RecentKeys;

/// Mirrors of inserted/fetched values, evicted through a [`RecentKeys`] queue
#[derive(Debug, Clone)]
pub struct MirrorCache {
    entries: HashMap<Key, Value>,
    recent: RecentKeys,
}

impl MirrorCache {
    pub fn new(recent_keys_limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recent: RecentKeys::new(recent_keys_limit),
        }
    }

    /// Run the eviction check that precedes every insert/fetch
    ///
    /// Returns the key whose mirror was dropped, if any.
    pub fn check_unused(&mut self) -> Option<Key> {
        let key = self.recent.age_out()?;
        self.entries.remove(&key);
        tracing::trace!("Evicted mirror for key '{}'", key);
        Some(key)
    }

    /// Store (or overwrite) the mirror for `key`
    pub fn mirror(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    /// Record `key` in the recently-used queue
    pub fn touch(&mut self, key: Key) {
        self.recent.touch(key);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Mirrored keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn recent(&self) -> &RecentKeys {
        &self.recent
    }

    /// Drop every mirror and forget the recently-used queue
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recent.clear();
    }
}
