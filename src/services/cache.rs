// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Explicit memoization for derived fitness metrics.

use crate::models::FitnessMetrics;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// Default entry lifetime (5 minutes).
const METRICS_TTL_SECS: i64 = 5 * 60;

/// Cached metrics with computation time.
#[derive(Clone)]
struct CachedMetrics {
    metrics: FitnessMetrics,
    computed_at: DateTime<Utc>,
}

/// Shared, caller-owned cache of derived metrics keyed by user id.
///
/// The engine never caches implicitly; construct one of these and hand it to
/// the services that should share computations. Clones share the same
/// entries.
#[derive(Clone)]
pub struct MetricsCache {
    entries: Arc<DashMap<u64, CachedMetrics>>,
    ttl: Duration,
}

impl Default for MetricsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(METRICS_TTL_SECS))
    }

    /// Cache with a custom entry lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Cached metrics for a user, if present and fresh.
    pub fn get(&self, user_id: u64) -> Option<FitnessMetrics> {
        let entry = self.entries.get(&user_id)?;
        if Utc::now() - entry.computed_at < self.ttl {
            Some(entry.metrics.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, user_id: u64, metrics: FitnessMetrics) {
        self.entries.insert(
            user_id,
            CachedMetrics {
                metrics,
                computed_at: Utc::now(),
            },
        );
    }

    /// Drop a user's entry (e.g. after an activity sync or deletion).
    pub fn invalidate(&self, user_id: u64) {
        self.entries.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_within_ttl() {
        let cache = MetricsCache::new();
        cache.insert(1, FitnessMetrics::empty());
        assert!(cache.get(1).is_some());
        assert!(cache.get(2).is_none());
    }

    #[test]
    fn test_expired_entry_misses() {
        let cache = MetricsCache::with_ttl(Duration::seconds(0));
        cache.insert(1, FitnessMetrics::empty());
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = MetricsCache::new();
        cache.insert(1, FitnessMetrics::empty());
        cache.invalidate(1);
        assert!(cache.get(1).is_none());
    }
}
