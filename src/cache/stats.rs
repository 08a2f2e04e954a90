//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, evictions and
//! oversized resets.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of requests served from resident entries
    pub hits: u64,
    /// Number of requests that had to call the unpacker
    pub misses: u64,
    /// Number of entries removed by the LRU eviction loop
    pub evictions: u64,
    /// Number of times an oversized item discarded the whole store
    pub resets: u64,
    /// Number of unpacker failures passed back to callers
    pub failures: u64,
    /// Current number of resident entries
    pub total_entries: usize,
    /// Current sum of resident payload sizes
    pub used_bytes: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_reset(&mut self) {
        self.resets += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    // == Update Occupancy ==
    /// Updates the resident entry count and byte usage.
    pub fn set_occupancy(&mut self, entries: usize, used_bytes: usize) {
        self.total_entries = entries;
        self.used_bytes = used_bytes;
    }
}
