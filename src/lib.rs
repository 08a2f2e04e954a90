//! Book Cache - a memory-bounded LRU cache for unpacked books
//!
//! Serves named books through a byte-budgeted, least-recently-used cache
//! that calls an [`unpack::Unpacker`] only on misses.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod unpack;

pub use api::AppState;
pub use cache::{BookCache, Content, Handle, Settings};
pub use config::Config;
pub use error::UnpackError;
pub use unpack::{DirUnpacker, MemoryUnpacker, Unpacker};
