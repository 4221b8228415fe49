//! Recently-used key queue

use std::collections::VecDeque;

use crate::key::Key;

/// Bounded FIFO of the last-touched keys
///
/// Duplicates are kept: a key touched twice appears twice, which is what
/// protects it from eviction when its older occurrence ages out.
#[derive(Debug, Clone)]
pub struct RecentKeys {
    keys: VecDeque<Key>,
    limit: usize,
}

impl RecentKeys {
    pub fn new(limit: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Age out the oldest key if the queue is at its limit
    ///
    /// Returns the removed key only if it no longer appears in the queue,
    /// i.e. when its mirror should be evicted.
    pub fn age_out(&mut self) -> Option<Key> {
        if self.keys.len() < self.limit {
            return None;
        }

        let oldest = self.keys.pop_front()?;
        if self.keys.contains(&oldest) {
            return None;
        }
        Some(oldest)
    }

    /// Record a key as most recently used
    pub fn touch(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    /// Keys from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
