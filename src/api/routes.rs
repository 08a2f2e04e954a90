//! API Routes
//!
//! Configures the Axum router with all book cache endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{get_book_handler, health_handler, stats_handler, AppState};
use crate::unpack::Unpacker;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /books/:name` - Fetch a book, unpacking it on a cache miss
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<U: Unpacker>(state: AppState<U>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/books/:name", get(get_book_handler::<U>))
        .route("/stats", get(stats_handler::<U>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
