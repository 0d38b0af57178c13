//! aerocalc: airport geometry, airport reports and binomial coefficients.
//!
//! Two independent cores live here:
//!
//! * [`airport`]: an immutable airport record, great-circle distances,
//!   multi-leg travel-time estimates, and sorted/derived report views.
//! * [`binomial`]: C(n, k) via a naive fixed-width strategy and a memoized
//!   arbitrary-precision strategy backed by a caller-owned cache.

#[macro_use]
pub mod logger;

pub mod airport;
pub mod binomial;
