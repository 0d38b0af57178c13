//! Binomial coefficients by Pascal's rule, naive and memoized.
//!
//! Both strategies walk `C(n, k) = C(n-1, k) + C(n-1, k-1)` with an explicit
//! work stack instead of native recursion, so deep `n` cannot exhaust the
//! call stack.

use super::cache::{BinomialCache, CacheStats, EvictionPolicy, Key};
use num::{BigUint, One, Zero};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How to evaluate a coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Unmemoized, fixed-width, exponential time.
    Naive,
    /// Memoized through the calculator's cache, arbitrary precision.
    #[default]
    Memoized,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Memoized => write!(f, "memoized"),
        }
    }
}

/// Classification of an `(n, k)` request.
enum Domain {
    /// Negative arguments or `k > n`.
    Outside,
    /// `k == 0` or `k == n`.
    Edge,
    Inner(Key),
}

fn classify(n: i32, k: i32) -> Domain {
    if n < 0 || k < 0 || k > n {
        return Domain::Outside;
    }
    if k == 0 || k == n {
        return Domain::Edge;
    }
    Domain::Inner((n.unsigned_abs(), k.unsigned_abs()))
}

fn is_edge((n, k): Key) -> bool {
    k == 0 || k == n
}

fn parents((n, k): Key) -> [Key; 2] {
    [(n - 1, k), (n - 1, k - 1)]
}

/// C(n, k) without memoization.
///
/// Returns 0 outside the domain. The sum wraps on overflow; keep `n`
/// moderate (the CLI caps it at 30).
pub fn choose_naive(n: i32, k: i32) -> u64 {
    let root = match classify(n, k) {
        Domain::Outside => return 0,
        Domain::Edge => return 1,
        Domain::Inner(key) => key,
    };

    let mut total: u64 = 0;
    let mut stack = vec![root];
    while let Some(key) = stack.pop() {
        if is_edge(key) {
            total = total.wrapping_add(1);
        } else {
            stack.extend(parents(key));
        }
    }
    total
}

/// C(n, k) memoized through `cache`, in arbitrary precision.
///
/// The cache is consulted before any subproblem is expanded; every value
/// computed here is stored back. Returns 0 outside the domain.
pub fn binomial(n: i32, k: i32, cache: &mut BinomialCache) -> BigUint {
    let root = match classify(n, k) {
        Domain::Outside => return BigUint::zero(),
        Domain::Edge => return BigUint::one(),
        Domain::Inner(key) => key,
    };

    // values seen during this call; a bounded cache may drop them mid-walk
    let mut resolved: HashMap<Key, BigUint> = HashMap::new();
    let mut stack: Vec<(Key, bool)> = vec![(root, false)];

    while let Some((key, expanded)) = stack.pop() {
        if resolved.contains_key(&key) {
            continue;
        }
        if !expanded {
            if let Some(value) = cache.get(key) {
                resolved.insert(key, value);
                continue;
            }
            stack.push((key, true));
            for parent in parents(key) {
                if !is_edge(parent) && !resolved.contains_key(&parent) {
                    stack.push((parent, false));
                }
            }
            continue;
        }

        // both parents were resolved before this entry resurfaced
        let value = parents(key)
            .iter()
            .map(|&p| {
                if is_edge(p) {
                    BigUint::one()
                } else {
                    resolved.get(&p).cloned().unwrap_or_default()
                }
            })
            .fold(BigUint::zero(), |acc, v| acc + v);
        cache.record_computation();
        cache.insert(key, value.clone());
        resolved.insert(key, value);
    }

    resolved.remove(&root).unwrap_or_default()
}

/// A value and how long it took to produce.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Both strategies behind one interface, with an owned cache.
pub struct BinomialCalculator {
    cache: BinomialCache,
}

impl Default for BinomialCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialCalculator {
    pub fn new() -> Self {
        Self { cache: BinomialCache::new() }
    }

    pub fn with_cache(cache: BinomialCache) -> Self {
        Self { cache }
    }

    pub fn with_policy(policy: EvictionPolicy) -> Self {
        Self::with_cache(BinomialCache::with_policy(policy))
    }

    pub fn naive(&self, n: i32, k: i32) -> u64 {
        choose_naive(n, k)
    }

    pub fn memoized(&mut self, n: i32, k: i32) -> BigUint {
        binomial(n, k, &mut self.cache)
    }

    pub fn choose(&mut self, strategy: Strategy, n: i32, k: i32) -> BigUint {
        match strategy {
            Strategy::Naive => BigUint::from(self.naive(n, k)),
            Strategy::Memoized => self.memoized(n, k),
        }
    }

    pub fn timed(&mut self, strategy: Strategy, n: i32, k: i32) -> Timed<BigUint> {
        let start = Instant::now();
        let value = self.choose(strategy, n, k);
        Timed { value, elapsed: start.elapsed() }
    }

    pub fn cache(&self) -> &BinomialCache {
        &self.cache
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Hand the cache back, e.g. to reuse it in another calculator.
    pub fn into_cache(self) -> BinomialCache {
        self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::ToPrimitive;

    #[test]
    fn test_known_values() {
        let mut cache = BinomialCache::new();
        assert_eq!(binomial(5, 2, &mut cache), BigUint::from(10u32));
        assert_eq!(binomial(0, 0, &mut cache), BigUint::one());
        assert_eq!(binomial(10, 3, &mut cache), BigUint::from(120u32));
        assert_eq!(choose_naive(5, 2), 10);
        assert_eq!(choose_naive(10, 3), 120);
    }

    #[test]
    fn test_out_of_domain_is_zero() {
        let mut cache = BinomialCache::new();
        for (n, k) in [(3, 4), (-1, 0), (5, -2), (-3, -3), (0, 1)] {
            assert_eq!(choose_naive(n, k), 0, "naive C({}, {})", n, k);
            assert!(binomial(n, k, &mut cache).is_zero(), "memo C({}, {})", n, k);
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_edges_are_one() {
        let mut cache = BinomialCache::new();
        for n in 0..50 {
            assert_eq!(binomial(n, 0, &mut cache), BigUint::one());
            assert_eq!(binomial(n, n, &mut cache), BigUint::one());
        }
        assert_eq!(cache.stats().computed, 0);
    }

    #[test]
    fn test_strategies_agree() {
        let mut cache = BinomialCache::new();
        for n in 0..=25 {
            for k in 0..=n {
                let memo = binomial(n, k, &mut cache);
                assert_eq!(memo.to_u64(), Some(choose_naive(n, k)), "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_large_value() {
        let mut cache = BinomialCache::new();
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(binomial(100, 50, &mut cache), expected);
    }

    #[test]
    fn test_largest_n_is_in_domain() {
        let mut cache = BinomialCache::new();
        let n = i32::MAX;
        assert_eq!(binomial(n, 0, &mut cache), BigUint::one());
        assert_eq!(binomial(n, n, &mut cache), BigUint::one());
        assert_eq!(choose_naive(n, n), 1);

        // seed C(n-1, 1) so only the top row is walked
        let below = n.unsigned_abs() - 1;
        cache.insert((below, 1), BigUint::from(below));
        assert_eq!(binomial(n, 1, &mut cache), BigUint::from(n.unsigned_abs()));
        assert_eq!(cache.stats().computed, 1);
    }

    #[test]
    fn test_deep_n_does_not_recurse() {
        let mut cache = BinomialCache::new();
        // C(5000, 2) = 5000 * 4999 / 2
        assert_eq!(binomial(5000, 2, &mut cache), BigUint::from(12_497_500u32));
        assert_eq!(binomial(5000, 4998, &mut cache), BigUint::from(12_497_500u32));
    }

    #[test]
    fn test_memoization_reduces_work() {
        let mut cache = BinomialCache::new();
        let first = binomial(30, 15, &mut cache);
        let after_first = cache.stats();
        assert!(after_first.computed > 0);

        let second = binomial(30, 15, &mut cache);
        let after_second = cache.stats();

        assert_eq!(first, second);
        assert_eq!(first.to_u64(), Some(155_117_520));
        assert!(after_second.computed - after_first.computed < after_first.computed);
        assert_eq!(after_second.computed, after_first.computed);
        assert_eq!(after_second.hits, after_first.hits + 1);
    }

    #[test]
    fn test_each_pair_computed_once() {
        let mut cache = BinomialCache::new();
        let _ = binomial(20, 10, &mut cache);
        // one addition per interior (n, k) reachable from (20, 10)
        assert_eq!(cache.stats().computed as usize, cache.len());
        let computed = cache.stats().computed;

        // (18, 9) only reaches pairs that (20, 10) also reaches, so warming
        // with it must not change the total amount of work
        let mut warmed = BinomialCache::new();
        let _ = binomial(18, 9, &mut warmed);
        let partial = warmed.stats().computed;
        let _ = binomial(20, 10, &mut warmed);
        assert!(partial < computed);
        assert_eq!(warmed.stats().computed, computed);
    }

    #[test]
    fn test_independent_caches() {
        let mut a = BinomialCache::new();
        let mut b = BinomialCache::new();
        let _ = binomial(12, 6, &mut a);
        assert!(!a.is_empty());
        assert!(b.is_empty());
        assert_eq!(binomial(12, 6, &mut b), binomial(12, 6, &mut a));
    }

    #[test]
    fn test_bounded_cache_stays_correct() {
        let mut cache = BinomialCache::with_policy(EvictionPolicy::LeastRecentlyUsed { capacity: 8 });
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(binomial(100, 50, &mut cache), expected);
        assert!(cache.len() <= 8);
        assert!(cache.stats().evictions > 0);
    }

    #[test]
    fn test_calculator_strategies() {
        let mut calc = BinomialCalculator::new();
        assert_eq!(calc.choose(Strategy::Naive, 20, 7), BigUint::from(77_520u32));
        assert_eq!(calc.choose(Strategy::Memoized, 20, 7), BigUint::from(77_520u32));
        assert_eq!(Strategy::default(), Strategy::Memoized);

        let timed = calc.timed(Strategy::default(), 20, 7);
        assert_eq!(timed.value, BigUint::from(77_520u32));
        assert!(calc.stats().hits >= 1);

        let cache = calc.into_cache();
        assert!(cache.contains((20, 7)));
    }
}
