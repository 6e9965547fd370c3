//! Configuration types shared across the engine and middleware.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the TTL read-through cache middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a cached result stays fresh. Expiry is checked on read; there
    /// is no active sweep.
    pub ttl: Duration,
    /// Maximum number of cached entries before least-recently-used eviction.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            max_entries: 256,
        }
    }
}

/// Global configuration for the `Quadro` engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on concurrently in-flight source fetches during a
    /// multi-series request.
    pub max_concurrency: usize,
    /// Timeout for an individual source request. A timeout affects only the
    /// series being fetched, never its siblings.
    pub source_timeout: Duration,
    /// Default years of history to request when the caller does not say
    /// (`None` = full available history).
    pub default_years: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 5,
            source_timeout: Duration::from_secs(15),
            default_years: None,
        }
    }
}
