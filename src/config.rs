//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::error::{ConfigError, Result};

/// Default TTL applied when `set` is called without one (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 100;

pub const ENV_DEFAULT_TTL_MS: &str = "CACHE_DEFAULT_TTL_MS";
pub const ENV_MAX_SIZE: &str = "CACHE_MAX_SIZE";
pub const ENV_CLEANUP_INTERVAL_MS: &str = "CACHE_CLEANUP_INTERVAL_MS";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for entries stored without an explicit one
    pub default_ttl: Duration,
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Interval for the opt-in background sweep, None = no sweep
    pub cleanup_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Background sweep interval (default: unset, no sweep)
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        info!(
            "Cache configuration loaded: max_size={}, default_ttl={}ms, cleanup_interval={:?}",
            config.max_size,
            config.default_ttl.as_millis(),
            config.cleanup_interval
        );
        Ok(config)
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_ttl = parse_var::<u64, _>(&lookup, ENV_DEFAULT_TTL_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.default_ttl);

        let max_size = match parse_var::<usize, _>(&lookup, ENV_MAX_SIZE)? {
            Some(0) => return Err(zero(ENV_MAX_SIZE)),
            Some(size) => size,
            None => defaults.max_size,
        };

        let cleanup_interval = match parse_var::<u64, _>(&lookup, ENV_CLEANUP_INTERVAL_MS)? {
            Some(0) => return Err(zero(ENV_CLEANUP_INTERVAL_MS)),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => defaults.cleanup_interval,
        };

        Ok(Self {
            default_ttl,
            max_size,
            cleanup_interval,
        })
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = Some(interval);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            max_size: DEFAULT_MAX_SIZE,
            cleanup_interval: None,
        }
    }
}

fn parse_var<V, F>(lookup: &F, name: &str) -> Result<Option<V>>
where
    V: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var: name.to_string(),
                value: raw,
            }),
    }
}

fn zero(name: &str) -> ConfigError {
    ConfigError::ZeroValue {
        var: name.to_string(),
    }
}
