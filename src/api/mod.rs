//! API Module
//!
//! HTTP handlers and routing for the book cache REST API.
//!
//! # Endpoints
//! - `GET /books/:name` - Fetch a book by name
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
