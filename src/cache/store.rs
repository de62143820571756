//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO insertion tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, Counters, InsertionOrder, SystemClock};
use crate::config::CacheConfig;

// == Bulk Types ==
/// One item for `set_many`.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheItem<T> {
    pub key: String,
    pub data: T,
    /// Falls back to the store's default TTL when None
    pub ttl: Option<Duration>,
}

impl<T> CacheItem<T> {
    pub fn new(key: impl Into<String>, data: T) -> Self {
        Self {
            key: key.into(),
            data,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// One result of `get_many`, in the same position as its requested key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheLookup<T> {
    pub key: String,
    pub data: Option<T>,
}

// == Cache Store ==
/// Bounded key-value cache with lazy TTL expiration and FIFO eviction.
///
/// Reads never refresh an entry's position, so eviction always removes the
/// entry that was inserted first. Overwriting a key keeps its original slot.
#[derive(Debug)]
pub struct CacheStore<T, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Insertion order tracker
    order: InsertionOrder,
    /// Request counters
    counters: Counters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL for entries stored without an explicit one
    default_ttl: Duration,
    clock: C,
}

impl<T> CacheStore<T, SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }

    /// Creates a new CacheStore from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size, config.default_ttl)
    }
}

impl<T, C: Clock> CacheStore<T, C> {
    /// Creates a store driven by a custom clock.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: Counters::new(),
            max_size,
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores a value with optional TTL.
    ///
    /// If the key already exists, the value and TTL are replaced in place and
    /// the key keeps its eviction slot. A new key arriving at capacity first
    /// evicts the oldest inserted entry. A store with `max_size == 0` keeps
    /// nothing.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `data` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if None)
    pub fn set(&mut self, key: impl Into<String>, data: T, ttl: Option<Duration>) {
        let key = key.into();
        let mut entry = CacheEntry::new(
            data,
            self.clock.now_ms(),
            ttl.unwrap_or(self.default_ttl),
        );

        // Overwrite keeps the original insertion token
        if let Some(existing) = self.entries.get_mut(&key) {
            entry.seq = existing.seq;
            *existing = entry;
            return;
        }

        if self.max_size == 0 {
            debug!("Cache has zero capacity, dropping key '{}'", key);
            return;
        }

        if self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        entry.seq = self.order.push(&key);
        self.entries.insert(key, entry);
        self.compact_order();
    }

    // == Has ==
    /// Returns true if the key holds a live entry.
    ///
    /// Stale entries are removed on the way. Counters are not touched.
    pub fn has(&mut self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    // == Delete ==
    /// Removes an entry by key. Absent keys are ignored.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Delete Many ==
    /// Applies `delete` to every key.
    pub fn delete_many<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.delete(key.as_ref());
        }
        self.compact_order();
    }

    // == Delete Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Returns the number of entries removed.
    pub fn delete_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.entries.len();

        if removed > 0 {
            debug!("Invalidated {} entries under prefix '{}'", removed, prefix);
            self.compact_order();
        }
        removed
    }

    // == Set Many ==
    /// Applies `set` to every item in order.
    pub fn set_many<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = CacheItem<T>>,
    {
        for item in items {
            self.set(item.key, item.data, item.ttl);
        }
    }

    // == Clear ==
    /// Empties the cache and resets every counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.counters.reset();
    }

    // == Cleanup ==
    /// Removes all expired entries without touching the counters.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.compact_order();
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    ///
    /// `size` is the raw entry count; stale entries that were not accessed
    /// since they expired are still included.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len())
    }

    // == Keys ==
    /// Iterates over stored keys from oldest to newest insertion, stale entries included.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .filter(move |(seq, key)| is_current(&self.entries, key, *seq))
            .map(|(_, key)| key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Returns the live entry for `key`, dropping it first if it went stale.
    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry<T>> {
        let now = self.clock.now_ms();
        let expired = self.entries.get(key)?.is_expired_at(now);

        if expired {
            self.entries.remove(key);
            debug!("Lazily expired key '{}'", key);
            return None;
        }
        self.entries.get(key)
    }

    fn evict_oldest(&mut self) {
        let entries = &self.entries;
        if let Some(evicted) = self.order.pop_oldest(|key, seq| is_current(entries, key, seq)) {
            self.entries.remove(&evicted);
            self.counters.record_eviction();
            debug!("Evicted oldest key '{}' to make room", evicted);
        }
    }

    fn compact_order(&mut self) {
        let entries = &self.entries;
        self.order
            .compact(entries.len(), |key, seq| is_current(entries, key, seq));
    }
}

impl<T: Clone, C: Clock> CacheStore<T, C> {
    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired; expired entries are
    /// removed. Every call counts as exactly one hit or one miss.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<T> {
        let data = self.live_entry(key).map(|entry| entry.data.clone());
        match data {
            Some(_) => self.counters.record_hit(),
            None => self.counters.record_miss(),
        }
        data
    }

    // == Get Many ==
    /// Applies `get` to every key, preserving input order.
    pub fn get_many<I, K>(&mut self, keys: I) -> Vec<CacheLookup<T>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| {
                let key = key.as_ref();
                CacheLookup {
                    key: key.to_string(),
                    data: self.get(key),
                }
            })
            .collect()
    }

    // == Get Or Insert ==
    /// Returns the cached value, or computes, stores and returns a fresh one.
    ///
    /// Counts as a single request.
    pub fn get_or_insert_with<F>(&mut self, key: &str, ttl: Option<Duration>, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some(data) = self.get(key) {
            return data;
        }
        let data = compute();
        self.set(key, data.clone(), ttl);
        data
    }
}

fn is_current<T>(entries: &HashMap<String, CacheEntry<T>>, key: &str, seq: u64) -> bool {
    entries.get(key).is_some_and(|entry| entry.seq == seq)
}
