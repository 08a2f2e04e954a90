//! Cache Module
//!
//! Byte-budgeted LRU caching of unpacked books.

mod book_cache;
mod content;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use book_cache::BookCache;
pub use content::{Content, Handle};
pub use recency::{RecencyList, SlotId};
pub use stats::CacheStats;
pub use store::{Admission, LruStore, Settings};
