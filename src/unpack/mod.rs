//! Unpacker Module
//!
//! The capability the cache consumes to materialize books it does not hold.
//!
//! # Implementations
//! - [`DirUnpacker`] - reads one file per book from a directory
//! - [`MemoryUnpacker`] - serves books from an in-memory library

mod dir;
mod memory;

use std::future::Future;

use crate::cache::Content;
use crate::error::Result;

pub use dir::DirUnpacker;
pub use memory::MemoryUnpacker;

// == Unpacker Trait ==
/// Materializes the full content of a named book, or fails.
///
/// The cache indexes what it receives under the requested name, whatever
/// name the returned [`Content`] carries.
pub trait Unpacker: Send + Sync + 'static {
    fn unpack(&self, name: &str) -> impl Future<Output = Result<Content>> + Send;
}
