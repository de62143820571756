//! Shared Cache Module
//!
//! Cloneable handle that lets many tasks use one store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheItem, CacheLookup, CacheStats, CacheStore, Clock, SystemClock};
use crate::config::CacheConfig;

// == Shared Cache ==
/// Thread-safe handle around a [`CacheStore`].
///
/// Each method takes the lock once for the whole logical operation, so a
/// `get` (check, expire, count) or a bulk call is never interleaved with
/// another writer. Clones share the same store.
pub struct SharedCache<T, C = SystemClock> {
    inner: Arc<RwLock<CacheStore<T, C>>>,
}

impl<T, C> Clone for SharedCache<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCache<T, SystemClock> {
    /// Creates a shared cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(CacheStore::from_config(config))
    }
}

impl<T, C: Clock> SharedCache<T, C> {
    /// Wraps an existing store.
    pub fn new(store: CacheStore<T, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn set(&self, key: impl Into<String>, data: T, ttl: Option<Duration>) {
        self.inner.write().await.set(key, data, ttl);
    }

    pub async fn set_many<I>(&self, items: I)
    where
        I: IntoIterator<Item = CacheItem<T>>,
    {
        self.inner.write().await.set_many(items);
    }

    /// Write lock: a stale entry is dropped on the way.
    pub async fn has(&self, key: &str) -> bool {
        self.inner.write().await.has(key)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    pub async fn delete_many<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.inner.write().await.delete_many(keys);
    }

    pub async fn delete_prefix(&self, prefix: &str) -> usize {
        self.inner.write().await.delete_prefix(prefix)
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn cleanup(&self) -> usize {
        self.inner.write().await.cleanup()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<T: Clone, C: Clock> SharedCache<T, C> {
    /// Write lock: counters and lazy expiry both mutate the store.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.inner.write().await.get(key)
    }

    pub async fn get_many<I, K>(&self, keys: I) -> Vec<CacheLookup<T>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.inner.write().await.get_many(keys)
    }

    // == Get Or Fetch ==
    /// Returns the cached value, or awaits `fetch` and caches its result.
    ///
    /// The lock is released while `fetch` runs. Errors are handed back to the
    /// caller unchanged and nothing is cached for them. Two tasks missing
    /// the same key at once may both fetch; the later write wins.
    pub async fn get_or_try_fetch<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(data) = self.get(key).await {
            return Ok(data);
        }

        debug!("Cache miss for '{}', fetching", key);
        let data = fetch().await?;
        self.set(key, data.clone(), ttl).await;
        Ok(data)
    }
}
