//! Book Cache Module
//!
//! Thread-safe fetch-or-unpack front over an [`LruStore`].

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{Admission, CacheStats, Handle, LruStore, Settings};
use crate::error::Result;
use crate::unpack::Unpacker;

// == Book Cache ==
/// Memory-bounded LRU cache in front of an [`Unpacker`].
///
/// One lock guards the whole of [`BookCache::get`], the unpacker call
/// included, so a slow unpack blocks every other caller until it returns.
/// Per-name locking would lift that bottleneck but changes which callers
/// wait on which.
#[derive(Debug)]
pub struct BookCache<U> {
    unpacker: U,
    store: Mutex<LruStore>,
}

impl<U: Unpacker> BookCache<U> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `unpacker` - Source of books that are not resident
    /// * `settings` - Byte budget for resident books
    pub fn new(unpacker: U, settings: Settings) -> Self {
        Self {
            unpacker,
            store: Mutex::new(LruStore::new(settings)),
        }
    }

    // == Get ==
    /// Returns the book called `name`, unpacking it on a miss.
    ///
    /// Hits only move the entry to the most recently used position. On a
    /// miss the unpacked book is admitted to the store, which may evict
    /// least recently used books or, for a book larger than the capacity,
    /// discard every resident book without keeping the new one.
    ///
    /// Unpacker failures are returned unchanged and leave the resident set,
    /// its order and its byte usage untouched.
    pub async fn get(&self, name: &str) -> Result<Handle> {
        let mut store = self.store.lock().await;

        if let Some(handle) = store.lookup(name) {
            return Ok(handle);
        }

        let handle = match self.unpacker.unpack(name).await {
            Ok(content) => content.into_handle(),
            Err(err) => {
                store.record_failure();
                warn!(name, error = %err, "unpack failed");
                return Err(err);
            }
        };

        // Oversized bypasses are logged by the store itself.
        if let Admission::Cached { evicted } = store.admit(name, Handle::clone(&handle)) {
            debug!(
                name,
                size = handle.size(),
                evicted,
                used_bytes = store.used_bytes(),
                "cached book"
            );
        }

        Ok(handle)
    }

    // == Inspection ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    /// Resident book names from most to least recently used.
    pub async fn resident_names(&self) -> Vec<String> {
        self.store.lock().await.resident_names()
    }

    pub async fn used_bytes(&self) -> usize {
        self.store.lock().await.used_bytes()
    }

    pub async fn capacity(&self) -> usize {
        self.store.lock().await.capacity()
    }

    pub fn unpacker(&self) -> &U {
        &self.unpacker
    }
}
