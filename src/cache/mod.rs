//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and FIFO capacity eviction.

mod clock;
mod entry;
mod keys;
mod order;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use keys::{CacheKey, KEY_SEPARATOR};
pub use order::InsertionOrder;
pub use shared::SharedCache;
pub use stats::{CacheStats, Counters};
pub use store::{CacheItem, CacheLookup, CacheStore};
