//! Content Module
//!
//! Defines the immutable named payload produced by an unpacker and the
//! shared handle through which the cache and its callers hold it.

use std::fmt;
use std::sync::Arc;

// == Handle ==
/// Shared-ownership reference to a [`Content`].
///
/// The cache keeps one clone while the entry is resident; every caller of
/// `get` receives another. Eviction only drops the cache's clone.
pub type Handle = Arc<Content>;

// == Content ==
/// A named, immutable byte payload.
#[derive(Clone, PartialEq, Eq)]
pub struct Content {
    name: String,
    bytes: Vec<u8>,
}

impl Content {
    // == Constructor ==
    /// Creates a new content value.
    ///
    /// # Arguments
    /// * `name` - Unique identifier the content was materialized for
    /// * `bytes` - The full payload
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Returns the content name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    // == Size ==
    /// Payload length in bytes. This is what counts against the cache budget.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Wraps the content in a [`Handle`].
    pub fn into_handle(self) -> Handle {
        Arc::new(self)
    }
}

// Payloads can be megabytes; keep Debug output to the metadata.
impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .finish()
    }
}
