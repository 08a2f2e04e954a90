//! API Handlers
//!
//! HTTP request handlers for each book cache endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::cache::{BookCache, Settings};
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};
use crate::unpack::{DirUnpacker, Unpacker};

/// Application state shared across all handlers.
///
/// The cache serializes its own access, so the state only needs an `Arc`.
pub struct AppState<U> {
    pub cache: Arc<BookCache<U>>,
}

impl<U> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<U: Unpacker> AppState<U> {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: BookCache<U>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Shorthand for a cache over `unpacker` with the given settings.
    pub fn with_unpacker(unpacker: U, settings: Settings) -> Self {
        Self::new(BookCache::new(unpacker, settings))
    }
}

impl AppState<DirUnpacker> {
    /// Creates a disk-backed AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_unpacker(DirUnpacker::new(&config.books_dir), config.settings())
    }
}

/// Handler for GET /books/:name
///
/// Returns the raw book bytes as `application/octet-stream`.
pub async fn get_book_handler<U: Unpacker>(
    State(state): State<AppState<U>>,
    Path(name): Path<String>,
) -> Result<Vec<u8>> {
    let book = state.cache.get(&name).await?;
    Ok(book.bytes().to_vec())
}

/// Handler for GET /stats
pub async fn stats_handler<U: Unpacker>(State(state): State<AppState<U>>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(&stats, state.cache.capacity().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
