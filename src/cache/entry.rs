//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use crate::cache::clock::duration_to_ms;

// == Cache Entry ==
/// Represents a single cache entry with its payload and timing metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub data: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Insertion sequence, used to match eviction-order tokens
    pub(crate) seq: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` after `now_ms`.
    ///
    /// A zero TTL produces an entry that is already stale.
    pub fn new(data: T, now_ms: u64, ttl: Duration) -> Self {
        Self {
            data,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(duration_to_ms(ttl)),
            seq: 0,
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale at the given time.
    ///
    /// Boundary condition: an entry is expired once the current time reaches
    /// `expires_at`, so an entry with TTL `t` is live for exactly `t` ms.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_at(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }

    /// Returns the TTL the entry was stored with.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.expires_at - self.created_at)
    }
}
