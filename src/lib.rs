//! Academy Cache - client-side TTL cache for the academy apps
//!
//! Provides a bounded in-memory key/value cache with lazy TTL expiration,
//! FIFO capacity eviction, bulk operations and hit/miss statistics.
//!
//! ```
//! use std::time::Duration;
//! use academy_cache::{CacheKey, CacheStore};
//!
//! let mut cache: CacheStore<Vec<String>> = CacheStore::new(100, Duration::from_secs(300));
//! let key = CacheKey::new("students").push("list").push(7);
//!
//! cache.set(key.clone(), vec!["Ada".to_string()], None);
//! assert_eq!(cache.get(&key.to_string()), Some(vec!["Ada".to_string()]));
//! assert_eq!(cache.stats().hit_rate, 100.0);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{
    CacheItem, CacheKey, CacheLookup, CacheStats, CacheStore, Clock, ManualClock, SharedCache,
    SystemClock,
};
pub use config::CacheConfig;
pub use error::ConfigError;
pub use tasks::{spawn_cleanup_task, spawn_configured_cleanup};
