//! Rebuild-on-query maintenance for derived, time-varying keys.
//!
//! When every pending item's priority changes at once (e.g. distance to a
//! moving elevator car), incremental repair would need an O(n) walk
//! anyway. [`RebuildQueue`] keeps an unordered request set and rebuilds a
//! heap from scratch for each query.
//!
//! # Key Types
//!
//! - [`RebuildQueue`]: request / peek_next / next_stop / cancel
//! - [`DistanceRule`]: derives a key from a payload and a reference state
//! - [`FloorDistance`]: `|floor - current|`, moves the reference to the served floor

mod engine;
mod types;

pub use engine::RebuildQueue;
pub use types::{DistanceRule, FloorDistance, Request};
