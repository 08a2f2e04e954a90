//! In-Memory Unpacker
//!
//! Serves books from a fixed library held in memory. Counts how often each
//! name is unpacked, which makes cache hits and misses observable.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::cache::Content;
use crate::error::{Result, UnpackError};
use crate::unpack::Unpacker;

#[derive(Debug, Default)]
pub struct MemoryUnpacker {
    books: HashMap<String, Vec<u8>>,
    /// Names that always fail, with the reason reported
    failures: HashMap<String, String>,
    /// Simulated unpacking latency
    delay: Option<Duration>,
    calls: Mutex<HashMap<String, u64>>,
}

impl MemoryUnpacker {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Builders ==
    /// Adds a book to the library.
    pub fn with_book(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Makes every unpack of `name` fail with `reason`.
    pub fn with_failure(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert(name.into(), reason.into());
        self
    }

    /// Sleeps for `delay` on every unpack before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Adds or replaces a book.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.books.insert(name.into(), bytes.into());
    }

    // == Call Counters ==
    /// Number of unpack attempts for `name`, failed ones included.
    pub fn calls(&self, name: &str) -> u64 {
        self.lock_calls().get(name).copied().unwrap_or(0)
    }

    /// Number of unpack attempts across all names.
    pub fn total_calls(&self) -> u64 {
        self.lock_calls().values().sum()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, HashMap<String, u64>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Unpacker for MemoryUnpacker {
    async fn unpack(&self, name: &str) -> Result<Content> {
        *self.lock_calls().entry(name.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = self.failures.get(name) {
            return Err(UnpackError::Failed {
                name: name.to_string(),
                reason: reason.clone(),
            });
        }

        self.books
            .get(name)
            .map(|bytes| Content::new(name, bytes.clone()))
            .ok_or_else(|| UnpackError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unpack_known_book() {
        let unpacker = MemoryUnpacker::new().with_book("emma", "It is a truth");

        let content = unpacker.unpack("emma").await.unwrap();
        assert_eq!(content.name(), "emma");
        assert_eq!(content.bytes(), b"It is a truth");
        assert_eq!(unpacker.calls("emma"), 1);
    }

    #[tokio::test]
    async fn test_unpack_unknown_book() {
        let unpacker = MemoryUnpacker::new();

        let result = unpacker.unpack("ghost").await;
        assert!(matches!(result, Err(UnpackError::NotFound(_))));
        assert_eq!(unpacker.calls("ghost"), 1);
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let unpacker = MemoryUnpacker::new()
            .with_book("z", "zzz")
            .with_failure("z", "corrupt archive");

        let result = unpacker.unpack("z").await;
        assert!(matches!(result, Err(UnpackError::Failed { reason, .. }) if reason == "corrupt archive"));
    }

    #[tokio::test]
    async fn test_call_counting() {
        let mut unpacker = MemoryUnpacker::new().with_book("a", "1");
        unpacker.insert("b", "2");

        unpacker.unpack("a").await.unwrap();
        unpacker.unpack("a").await.unwrap();
        unpacker.unpack("b").await.unwrap();

        assert_eq!(unpacker.calls("a"), 2);
        assert_eq!(unpacker.calls("b"), 1);
        assert_eq!(unpacker.calls("c"), 0);
        assert_eq!(unpacker.total_calls(), 3);
    }
}
