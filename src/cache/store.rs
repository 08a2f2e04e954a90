//! Cache Store Module
//!
//! Byte-budgeted LRU store: a name index over an arena recency list of
//! keyed shared handles, plus the running total of resident payload bytes.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::cache::{CacheStats, Handle, RecencyList, SlotId};

// == Settings ==
/// Construction-time cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum total resident bytes
    pub capacity: usize,
}

impl Settings {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

// == Admission ==
/// Outcome of offering freshly unpacked content to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The content is now resident after evicting `evicted` entries.
    Cached { evicted: usize },
    /// The content is larger than the whole capacity. The store discarded
    /// its `discarded` entries and did not keep the content.
    Bypassed { discarded: usize },
}

// == LRU Store ==
/// Resident set of the cache.
///
/// Invariants after every public call:
/// - `used_bytes` equals the sum of resident content sizes
/// - `used_bytes <= capacity`
/// - the index and the recency list hold exactly the same entries
#[derive(Debug)]
pub struct LruStore {
    /// Name -> position in the recency list
    index: HashMap<String, SlotId>,
    /// (name, handle) pairs ordered most to least recently used
    recency: RecencyList<(String, Handle)>,
    used_bytes: usize,
    settings: Settings,
    stats: CacheStats,
}

impl LruStore {
    // == Constructor ==
    /// Creates an empty store bounded by `settings.capacity` bytes.
    pub fn new(settings: Settings) -> Self {
        Self {
            index: HashMap::new(),
            recency: RecencyList::new(),
            used_bytes: 0,
            settings,
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    /// Returns the resident handle for `name`, marking it most recently used.
    ///
    /// Records a hit or a miss. Nothing else changes on a hit.
    pub fn lookup(&mut self, name: &str) -> Option<Handle> {
        let handle = self.index.get(name).copied().and_then(|slot| {
            self.recency.move_to_front(slot);
            self.recency.get(slot).map(|(_, handle)| Handle::clone(handle))
        });

        match handle {
            Some(handle) => {
                self.stats.record_hit();
                debug!(name, "cache hit");
                Some(handle)
            }
            None => {
                self.stats.record_miss();
                debug!(name, "cache miss");
                None
            }
        }
    }

    // == Admit ==
    /// Offers freshly unpacked content to the store under `name`, the name
    /// it was requested by. The content's own name plays no part in keying.
    ///
    /// Content larger than the capacity clears the whole store and is not
    /// kept. Otherwise least recently used entries are evicted, only as many
    /// as needed, and the content is inserted at the front.
    pub fn admit(&mut self, name: &str, handle: Handle) -> Admission {
        let size = handle.size();
        let capacity = self.settings.capacity;

        if size > capacity {
            let discarded = self.recency.len();
            self.reset();
            self.stats.record_reset();
            info!(
                name,
                size, capacity, discarded, "Oversized content bypassed cache, store reset"
            );
            return Admission::Bypassed { discarded };
        }

        // Only reachable when callers bypass the lookup; keeps the budget exact.
        if let Some(slot) = self.index.remove(name) {
            if let Some((_, previous)) = self.recency.remove(slot) {
                self.used_bytes -= previous.size();
            }
        }

        let mut evicted = 0;
        while !self.fits(size) {
            let Some((victim_name, victim)) = self.recency.pop_back() else {
                break;
            };
            self.index.remove(&victim_name);
            self.used_bytes -= victim.size();
            self.stats.record_eviction();
            evicted += 1;
            debug!(name = %victim_name, size = victim.size(), "evicted");
        }

        let slot = self.recency.push_front((name.to_string(), handle));
        self.index.insert(name.to_string(), slot);
        self.used_bytes += size;
        self.sync_occupancy();

        Admission::Cached { evicted }
    }

    // == Reset ==
    /// Drops every resident entry. Outstanding handles stay valid.
    pub fn reset(&mut self) {
        self.index.clear();
        self.recency.clear();
        self.used_bytes = 0;
        self.sync_occupancy();
    }

    /// Counts an unpacker failure.
    pub fn record_failure(&mut self) {
        self.stats.record_failure();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity
    }

    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Checks residency without touching recency.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resident names from most to least recently used.
    pub fn resident_names(&self) -> Vec<String> {
        self.recency
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn fits(&self, size: usize) -> bool {
        size <= self.settings.capacity.saturating_sub(self.used_bytes)
    }

    fn sync_occupancy(&mut self) {
        self.stats.set_occupancy(self.index.len(), self.used_bytes);
    }
}
