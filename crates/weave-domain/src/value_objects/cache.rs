//! Result cache statistics

use serde::{Deserialize, Serialize};

/// Result cache operation statistics
///
/// Tracks hits, misses and stored entries of a result cache.
///
/// # Example
///
/// ```
/// use weave_domain::value_objects::CacheStats;
///
/// let stats = CacheStats::from_counts(3, 1, 1);
/// assert_eq!(stats.hit_rate, 0.75);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of stored entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Build statistics from raw counters, deriving the hit rate
    pub fn from_counts(hits: u64, misses: u64, entries: u64) -> Self {
        let lookups = hits + misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            hits as f64 / lookups as f64
        };
        Self {
            hits,
            misses,
            entries,
            hit_rate,
        }
    }

    /// Total number of lookups
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}
