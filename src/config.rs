//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Default byte budget when `CACHE_MAX_SIZE` is not set (64 MiB).
const DEFAULT_MAX_SIZE: u64 = 64 * 1024 * 1024;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum total size of cached entries in bytes
    pub max_size: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Byte budget for the cache (default: 67108864,
    ///   i.e. 64 MiB)
    ///
    /// An absent variable falls back to its default; a variable that is
    /// present but not a valid integer is an error rather than a silent
    /// fallback, so a mistyped budget cannot go unnoticed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_size = match env::var("CACHE_MAX_SIZE") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "CACHE_MAX_SIZE",
                value,
            })?,
            Err(_) => DEFAULT_MAX_SIZE,
        };

        Ok(Self { max_size })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}
