//! Insertion Order Module
//!
//! Tracks the order in which keys entered the cache for FIFO eviction.

use std::collections::VecDeque;

/// Stale tokens tolerated before the queue is compacted
const COMPACT_SLACK: usize = 32;

// == Insertion Order ==
/// Tracks insertion order for the FIFO eviction strategy.
///
/// Every newly inserted key gets a `(seq, key)` token:
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Removing a key never touches the queue. A token is only honoured while
/// the cache still holds that key with the same `seq`, so tokens left
/// behind by deleted, expired or re-inserted keys are skipped on eviction
/// and dropped on compaction.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Tokens ordered by insertion time
    queue: VecDeque<(u64, String)>,
    /// Sequence number for the next insertion
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push ==
    /// Records a new insertion at the back and returns its sequence number.
    pub fn push(&mut self, key: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back((seq, key.to_string()));
        seq
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest key that is still current.
    ///
    /// `is_current(key, seq)` must report whether the cache still holds
    /// `key` under `seq`. Returns None once no current token remains.
    pub fn pop_oldest<F>(&mut self, mut is_current: F) -> Option<String>
    where
        F: FnMut(&str, u64) -> bool,
    {
        while let Some((seq, key)) = self.queue.pop_front() {
            if is_current(&key, seq) {
                return Some(key);
            }
        }
        None
    }

    // == Compact ==
    /// Drops stale tokens once they clearly outnumber the live entries.
    pub fn compact<F>(&mut self, live: usize, mut is_current: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        if self.queue.len() > live.saturating_mul(2) + COMPACT_SLACK {
            self.queue.retain(|(seq, key)| is_current(key, *seq));
        }
    }

    // == Iterate ==
    /// Iterates over `(seq, key)` tokens from oldest to newest, stale ones included.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.queue.iter().map(|(seq, key)| (*seq, key.as_str()))
    }

    // == Clear ==
    /// Forgets every token. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    // == Length ==
    /// Returns the number of tokens, stale ones included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
