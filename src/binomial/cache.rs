//! Memo cache for binomial coefficients, keyed by `(n, k)`.
//!
//! Owned by the caller and passed into the calculator; independent caches
//! never share entries. Eviction is explicit: unbounded by default, or
//! least-recently-used with a fixed capacity.

use num::BigUint;
use std::collections::HashMap;

/// A `(n, k)` pair with `0 < k < n`.
pub type Key = (u32, u32);

/// How the cache bounds its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Never evict. Memory grows with the number of distinct subproblems.
    #[default]
    Unbounded,
    /// Keep at most `capacity` entries, dropping the least recently used.
    LeastRecentlyUsed { capacity: usize },
}

impl std::fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::LeastRecentlyUsed { capacity } => write!(f, "lru({})", capacity),
        }
    }
}

/// Counters for observing memoization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Additions performed, one per subproblem expanded.
    pub computed: u64,
    pub evictions: u64,
}

struct CacheEntry {
    value: BigUint,
    last_used: u64,
}

/// The binomial memo cache.
pub struct BinomialCache {
    entries: HashMap<Key, CacheEntry>,
    policy: EvictionPolicy,
    clock: u64,
    stats: CacheStats,
}

impl Default for BinomialCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::with_policy(EvictionPolicy::Unbounded)
    }

    pub fn with_policy(policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Look up a key, refreshing its recency. Counts a hit or a miss.
    pub fn get(&mut self, key: Key) -> Option<BigUint> {
        self.clock += 1;
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.last_used = self.clock;
                self.stats.hits += 1;
                Some(entry.value.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Whether a key is present. Does not touch recency or counters.
    pub fn contains(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    /// Store a value, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: Key, value: BigUint) {
        if let EvictionPolicy::LeastRecentlyUsed { capacity } = self.policy {
            if capacity == 0 {
                return;
            }
            if !self.entries.contains_key(&key) && self.entries.len() >= capacity {
                self.evict_oldest();
            }
        }
        self.clock += 1;
        self.entries.insert(key, CacheEntry { value, last_used: self.clock });
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.last_used)
            .map(|(k, _)| *k);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.stats.evictions += 1;
            debug!("binomial cache evicted C({}, {})", key.0, key.1);
        }
    }

    pub(super) fn record_computation(&mut self) {
        self.stats.computed += 1;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_get_counts_hits_and_misses() {
        let mut cache = BinomialCache::new();
        assert!(cache.get((5, 2)).is_none());
        cache.insert((5, 2), big(10));
        assert_eq!(cache.get((5, 2)), Some(big(10)));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unbounded_never_evicts() {
        let mut cache = BinomialCache::new();
        for n in 2..200u32 {
            cache.insert((n, 1), big(u64::from(n)));
        }
        assert_eq!(cache.len(), 198);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut cache = BinomialCache::with_policy(EvictionPolicy::LeastRecentlyUsed { capacity: 2 });
        cache.insert((4, 1), big(4));
        cache.insert((4, 2), big(6));
        // touch (4, 1) so (4, 2) becomes the oldest
        assert!(cache.get((4, 1)).is_some());
        cache.insert((5, 2), big(10));

        assert_eq!(cache.len(), 2);
        assert!(cache.contains((4, 1)));
        assert!(!cache.contains((4, 2)));
        assert!(cache.contains((5, 2)));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_lru_overwrite_does_not_evict() {
        let mut cache = BinomialCache::with_policy(EvictionPolicy::LeastRecentlyUsed { capacity: 1 });
        cache.insert((4, 2), big(6));
        cache.insert((4, 2), big(6));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = BinomialCache::with_policy(EvictionPolicy::LeastRecentlyUsed { capacity: 0 });
        cache.insert((4, 2), big(6));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_keeps_stats() {
        let mut cache = BinomialCache::new();
        cache.insert((3, 1), big(3));
        let _ = cache.get((3, 1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(EvictionPolicy::Unbounded.to_string(), "unbounded");
        assert_eq!(EvictionPolicy::LeastRecentlyUsed { capacity: 64 }.to_string(), "lru(64)");
    }
}
