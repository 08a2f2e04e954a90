//! Cache Behaviour Tests
//!
//! Drives `BookCache` through its public API: hit/miss accounting, LRU
//! order, the oversized reset, failure handling and concurrent callers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use book_cache::error::Result;
use book_cache::{BookCache, Content, MemoryUnpacker, Settings, UnpackError, Unpacker};

fn sized_library(sizes: &[(&str, usize)]) -> MemoryUnpacker {
    sizes
        .iter()
        .fold(MemoryUnpacker::new(), |unpacker, (name, size)| {
            unpacker.with_book(*name, vec![0u8; *size])
        })
}

#[tokio::test]
async fn test_idempotent_hit() {
    let cache = BookCache::new(sized_library(&[("x", 3)]), Settings::new(10));

    let first = cache.get("x").await.unwrap();
    let second = cache.get("x").await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.unpacker().calls("x"), 1);
}

/// Hands back content titled differently from the name it was asked for.
#[derive(Default)]
struct TitleCaseUnpacker {
    calls: AtomicU64,
}

impl Unpacker for TitleCaseUnpacker {
    async fn unpack(&self, name: &str) -> Result<Content> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Content::new(name.to_uppercase(), name.as_bytes().to_vec()))
    }
}

#[tokio::test]
async fn test_entries_keyed_by_requested_name() {
    let cache = BookCache::new(TitleCaseUnpacker::default(), Settings::new(2));

    let first = cache.get("x").await.unwrap();
    let second = cache.get("x").await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), "X");
    assert_eq!(cache.unpacker().calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.resident_names().await, vec!["x"]);

    // Evicting "x" must leave the index consistent with what is resident
    cache.get("y").await.unwrap();
    cache.get("z").await.unwrap();
    assert_eq!(cache.resident_names().await, vec!["z", "y"]);
    assert_eq!(cache.stats().await.total_entries, 2);

    cache.get("x").await.unwrap();
    assert_eq!(cache.unpacker().calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_hit_promotes_entry() {
    let cache = BookCache::new(
        sized_library(&[("a", 1), ("b", 1), ("c", 1)]),
        Settings::new(2),
    );

    cache.get("a").await.unwrap();
    cache.get("b").await.unwrap();
    cache.get("a").await.unwrap();
    cache.get("c").await.unwrap();

    let names = cache.resident_names().await;
    assert!(names.contains(&"a".to_string()));
    assert!(!names.contains(&"b".to_string()));
}

#[tokio::test]
async fn test_oversized_bypass() {
    let cache = BookCache::new(
        sized_library(&[("a", 5), ("huge", 50)]),
        Settings::new(10),
    );

    cache.get("a").await.unwrap();
    assert_eq!(cache.unpacker().calls("a"), 1);

    let huge = cache.get("huge").await.unwrap();
    assert_eq!(huge.name(), "huge");
    assert_eq!(huge.size(), 50);

    cache.get("a").await.unwrap();
    assert_eq!(cache.unpacker().calls("a"), 2);
}

#[tokio::test]
async fn test_shared_survival() {
    let unpacker = MemoryUnpacker::new()
        .with_book("a", "alpha")
        .with_book("b", "bravo")
        .with_book("c", "charlie");
    let cache = BookCache::new(unpacker, Settings::new(12));

    let a = cache.get("a").await.unwrap();
    cache.get("b").await.unwrap();
    cache.get("c").await.unwrap();

    assert!(!cache.resident_names().await.contains(&"a".to_string()));
    assert_eq!(a.name(), "a");
    assert_eq!(a.bytes(), b"alpha");
}

#[tokio::test]
async fn test_failure_non_mutation() {
    let unpacker = sized_library(&[("a", 2), ("b", 3)]).with_failure("z", "bad archive");
    let cache = BookCache::new(unpacker, Settings::new(5));

    cache.get("a").await.unwrap();
    cache.get("b").await.unwrap();
    let before = (cache.resident_names().await, cache.used_bytes().await);

    let err = cache.get("z").await.unwrap_err();

    assert!(matches!(err, UnpackError::Failed { ref name, .. } if name == "z"));
    assert_eq!(
        (cache.resident_names().await, cache.used_bytes().await),
        before
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_keep_store_consistent() {
    const TASKS: usize = 8;
    const REQUESTS_PER_TASK: usize = 50;

    let sizes: HashMap<String, usize> = (0..12)
        .map(|i| (format!("book{}", i), 1 + (i * 7) % 9))
        .collect();
    let unpacker = sizes
        .iter()
        .fold(MemoryUnpacker::new(), |unpacker, (name, size)| {
            unpacker.with_book(name.clone(), vec![0u8; *size])
        });
    let cache = Arc::new(BookCache::new(unpacker, Settings::new(20)));

    let handles: Vec<_> = (0..TASKS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                for i in 0..REQUESTS_PER_TASK {
                    let name = format!("book{}", (t * 5 + i * 3) % 12);
                    let handle = cache.get(&name).await.unwrap();
                    assert_eq!(handle.name(), name);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = cache.stats().await;
    let resident = cache.resident_names().await;
    let resident_bytes: usize = resident.iter().map(|name| sizes[name]).sum();

    assert_eq!(stats.hits + stats.misses, (TASKS * REQUESTS_PER_TASK) as u64);
    assert_eq!(stats.misses, cache.unpacker().total_calls());
    assert_eq!(cache.used_bytes().await, resident_bytes);
    assert!(resident_bytes <= cache.capacity().await);
    assert_eq!(stats.total_entries, resident.len());
}
