//! LRU Cache Module
//!
//! Thread-safe front of the cache engine: one exclusive lock serializes
//! every operation over the store.

use parking_lot::Mutex;

use crate::cache::{Cache, CacheStats, CacheStore};
use crate::config::CacheConfig;

// == LRU Cache ==
/// A thread-safe, byte-size-bounded in-memory cache with LRU eviction.
///
/// All operations take `&self` and go through a single mutex. The lock is
/// exclusive even for [`get`](LruCache::get): a hit moves the entry to the
/// most-recently used position, so reads mutate internal state and a
/// shared read lock would not be sound.
///
/// ```
/// use bytecache::LruCache;
///
/// let cache = LruCache::new(1_000_000);
/// cache.set("greeting", b"hello".to_vec());
/// assert_eq!(cache.get("greeting"), Some(b"hello".to_vec()));
/// ```
#[derive(Debug)]
pub struct LruCache {
    /// The engine; the mutex covers the index, the recency list, and the
    /// size accounting as one unit
    inner: Mutex<CacheStore>,
}

impl LruCache {
    // == Constructor ==
    /// Creates an LruCache restricted to `max_size` bytes.
    ///
    /// Construction never fails; a budget of 0 yields a valid cache that
    /// evicts every insertion immediately.
    pub fn new(max_size: u64) -> Self {
        Self {
            inner: Mutex::new(CacheStore::new(max_size)),
        }
    }

    // == From Config ==
    /// Creates an LruCache with the budget from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size)
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, marking the entry
    /// as most-recently used.
    ///
    /// Returns None if the key is absent; a miss has no side effect on
    /// eviction order. The returned bytes are the caller's own copy; the
    /// cache never mutates a stored value after insertion.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().get(key).map(|value| value.to_vec())
    }

    // == Set ==
    /// Stores `value` under `key`, evicting least-recently used entries
    /// as needed to stay within the byte budget.
    pub fn set(&self, key: &str, value: Vec<u8>) {
        self.inner.lock().set(key, value);
    }

    // == Delete ==
    /// Removes the entry stored under `key`; absent keys are a no-op.
    pub fn delete(&self, key: &str) {
        self.inner.lock().delete(key);
    }

    // == Size ==
    /// Returns the current running size in bytes.
    pub fn size(&self) -> u64 {
        self.inner.lock().size()
    }

    // == Max Size ==
    /// Returns the byte budget the cache was created with.
    pub fn max_size(&self) -> u64 {
        self.inner.lock().max_size()
    }

    // == Contains Key ==
    /// Checks whether `key` is present without touching recency order.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

// == Cache Implementation ==
impl Cache for LruCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        LruCache::get(self, key)
    }

    fn set(&self, key: &str, value: Vec<u8>) {
        LruCache::set(self, key, value);
    }

    fn delete(&self, key: &str) {
        LruCache::delete(self, key);
    }
}
