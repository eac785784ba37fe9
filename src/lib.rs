//! Bytecache - A byte-size-bounded in-memory LRU cache
//!
//! Holds opaque byte blobs under string keys and evicts the least
//! recently used entries once a configured byte budget is exceeded. Meant
//! as the storage backend of an HTTP response-caching layer; safe for
//! concurrent use from many threads.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, CacheStore, LruCache, ENTRY_OVERHEAD};
pub use config::CacheConfig;
pub use error::ConfigError;
