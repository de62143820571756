//! TTL Cleanup Task
//!
//! Opt-in background task that periodically removes expired cache entries.
//! The store never starts one on its own; reads already expire lazily.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, SharedCache};
use crate::config::CacheConfig;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps. Each sweep holds the write lock only for the `cleanup()` call.
///
/// # Returns
/// A JoinHandle for the spawned task. The caller owns it and aborts it
/// when the cache is no longer needed.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::from_config(&config);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<T, C>(cache: SharedCache<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

/// Starts the cleanup task only when the configuration asks for one.
pub fn spawn_configured_cleanup<T, C>(
    cache: &SharedCache<T, C>,
    config: &CacheConfig,
) -> Option<JoinHandle<()>>
where
    T: Send + Sync + 'static,
    C: Clock + 'static,
{
    config
        .cleanup_interval
        .map(|interval| spawn_cleanup_task(cache.clone(), interval))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, ManualClock};

    fn shared() -> (SharedCache<String, ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let store = CacheStore::with_clock(100, Duration::from_secs(300), clock.clone());
        (SharedCache::new(store), clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let (cache, clock) = shared();

        cache
            .set("expire_soon", "value".to_string(), Some(Duration::from_secs(1)))
            .await;
        clock.advance(Duration::from_secs(2));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));

        // Paused runtime: sleeping auto-advances tokio time past one sweep
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        assert_eq!(cache.len().await, 0, "Expired entry should have been cleaned up");
        assert_eq!(cache.stats().await.total_requests, 0);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let (cache, _) = shared();

        cache
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)))
            .await;

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(3_500)).await;

        assert_eq!(cache.get("long_lived").await, Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_configured_cleanup_is_opt_in() {
        let (cache, _) = shared();

        assert!(spawn_configured_cleanup(&cache, &CacheConfig::default()).is_none());

        let config = CacheConfig::default().with_cleanup_interval(Duration::from_secs(1));
        let handle = spawn_configured_cleanup(&cache, &config).expect("interval is set");
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let (cache, _) = shared();

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));

        handle.abort();

        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled(), "Task should be cancelled after abort");
    }
}
