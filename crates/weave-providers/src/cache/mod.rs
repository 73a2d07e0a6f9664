//! Result cache store
//!
//! Backing store for [`CachingAdvice`](crate::advice::CachingAdvice).
//!
//! ## Known limitation
//!
//! The store grows without bound. Entries are only removed through the
//! administrative [`ResultCache::invalidate`] and [`ResultCache::clear`]
//! calls; the advice itself never evicts.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use weave_domain::value_objects::{CacheStats, Value};

/// Concurrent map from integer keys to computed results
///
/// Lookups and insertions are synchronized per shard by `DashMap`, so a
/// reader never sees a partially written entry. Stored entries are never
/// overwritten: when two callers race on the same key, the first insert
/// wins.
#[derive(Default)]
pub struct ResultCache {
    entries: DashMap<i64, Value>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss
    pub fn lookup(&self, key: i64) -> Option<Value> {
        let found = self.entries.get(&key).map(|entry| entry.value().clone());
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Read a key without touching the statistics
    pub fn peek(&self, key: i64) -> Option<Value> {
        self.entries.get(&key).map(|entry| entry.value().clone())
    }

    /// Store a value unless the key is already present
    ///
    /// Returns `true` when this call stored the value.
    pub fn insert(&self, key: i64, value: Value) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Check whether a key is stored
    pub fn contains(&self, key: i64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Remove one entry, returning its value
    pub fn invalidate(&self, key: i64) -> Option<Value> {
        self.entries.remove(&key).map(|(_, value)| value)
    }

    /// Remove every entry; statistics are kept
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_counts(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.entries.len() as u64,
        )
    }
}

impl fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("entries", &self.entries.len())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}
