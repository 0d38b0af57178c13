//! Binomial coefficients: naive fixed-width and memoized big-integer.

pub mod cache;
pub mod calculator;

pub use cache::{BinomialCache, CacheStats, EvictionPolicy};
pub use calculator::{binomial, choose_naive, BinomialCalculator, Strategy, Timed};

/// Largest `n` the CLI will hand to the naive strategy.
pub const NAIVE_LIMIT: i32 = 30;
