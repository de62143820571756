//! Cache Statistics Module
//!
//! Tracks request counters and produces the statistics snapshot returned by the store.

use serde::Serialize;

// == Counters ==
/// Running request counters, reset only by `clear()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or a stale entry
    pub misses: u64,
    /// Every counted lookup
    pub total_requests: u64,
    /// Entries removed to make room for a new key
    pub evictions: u64,
}

impl Counters {
    // == Constructor ==
    /// Creates a new set of counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Counts a lookup that found a live entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.total_requests += 1;
    }

    // == Record Miss ==
    /// Counts a lookup that found nothing usable.
    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.total_requests += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // == Snapshot ==
    /// Builds a statistics snapshot for a store holding `size` entries.
    pub fn snapshot(&self, size: usize) -> CacheStats {
        CacheStats {
            size,
            hit_rate: percentage(self.hits, self.total_requests),
            miss_rate: percentage(self.misses, self.total_requests),
            total_requests: self.total_requests,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of the cache, serialized in camelCase for JS clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Raw entry count, stale entries included
    pub size: usize,
    /// Hits as a percentage of all requests (0 when there were none)
    pub hit_rate: f64,
    /// Misses as a percentage of all requests (0 when there were none)
    pub miss_rate: f64,
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
