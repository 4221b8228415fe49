//! Cache Module
//!
//! Mirrors of recently touched values, bounded by a recently-used queue.
//!
//! ## Eviction Rule
//! Every `insert`/`fetch` first checks the queue. Once it holds
//! `recent_keys_limit` (default 5) or more keys:
//! 1. The oldest key is removed from the queue
//! 2. If that key still appears later in the queue, its mirror is kept
//! 3. Otherwise its mirror is dropped
//!
//! A key touched again recently is protected; one touched once and then aged
//! out loses its mirror but stays readable from disk.

mod mirror;
mod recent;

pub use mirror::MirrorCache;
pub use recent::RecentKeys;
