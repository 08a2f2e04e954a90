//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::Settings;

/// Default cache budget: 64 MiB
pub const DEFAULT_CAPACITY: usize = 64 * 1024 * 1024;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum total bytes of resident books
    pub capacity: usize,
    /// Directory the unpacker reads books from
    pub books_dir: PathBuf,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache budget in bytes (default: 64 MiB)
    /// - `BOOKS_DIR` - Book directory (default: ./books)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            books_dir: env::var_os("BOOKS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.books_dir),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Cache settings derived from this configuration.
    pub fn settings(&self) -> Settings {
        Settings::new(self.capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            books_dir: PathBuf::from("./books"),
            server_port: 3000,
        }
    }
}
