//! Cache Statistics Module
//!
//! Tracks cache activity: lookups, replacements, removals and expirations.

use std::ops::Add;

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that found a live entry
    pub hits: u64,
    /// Number of `get` calls that failed with `NoSuchKey`
    pub misses: u64,
    /// Number of `put` calls that replaced a live entry
    pub replacements: u64,
    /// Number of entries deleted by an explicit `remove`
    pub removals: u64,
    /// Number of entries evicted by their expiry timer
    pub expirations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl Add for CacheStats {
    type Output = CacheStats;

    fn add(self, other: CacheStats) -> CacheStats {
        CacheStats {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            replacements: self.replacements + other.replacements,
            removals: self.removals + other.removals,
            expirations: self.expirations + other.expirations,
            total_entries: self.total_entries + other.total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.expirations, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_counters() {
        let mut stats = CacheStats::new();
        stats.record_replacement();
        stats.record_removal();
        stats.record_removal();
        stats.record_expiration();
        assert_eq!(stats.replacements, 1);
        assert_eq!(stats.removals, 2);
        assert_eq!(stats.expirations, 1);
    }

    #[test]
    fn test_stats_sum() {
        let mut a = CacheStats::new();
        a.record_hit();
        a.set_total_entries(2);
        let mut b = CacheStats::new();
        b.record_miss();
        b.record_expiration();
        b.set_total_entries(3);

        let total = a + b;
        assert_eq!(total.hits, 1);
        assert_eq!(total.misses, 1);
        assert_eq!(total.expirations, 1);
        assert_eq!(total.total_entries, 5);
    }
}
