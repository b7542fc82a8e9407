//! Request records and the derived-key trait.

use crate::heap::HeapKey;

/// A pending request held in the request set.
///
/// `sequence` identifies the request for removal; derived keys may
/// collide, sequences never do.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request<P> {
    pub sequence: u64,
    pub payload: P,
}

/// Derives a heap key from a payload and a moving reference state.
///
/// Keys are recomputed for every pending request on each query, so a rule
/// may depend on anything in the reference (current position, clock).
///
/// # Examples
///
/// ```
/// use u_prioheap::rebuild::DistanceRule;
///
/// // Earliest deadline relative to a clock; serving a job advances the clock.
/// struct Slack;
///
/// impl DistanceRule<(u64, u64), u64> for Slack {
///     type Key = i64;
///     fn name(&self) -> &str { "Slack" }
///     fn key(&self, job: &(u64, u64), now: &u64) -> i64 {
///         job.1 as i64 - (*now + job.0) as i64
///     }
///     fn advance(&self, now: &mut u64, job: &(u64, u64)) {
///         *now += job.0;
///     }
/// }
/// ```
pub trait DistanceRule<P, R>: Send + Sync {
    /// Key type produced by the rule.
    type Key: HeapKey;

    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the key of `payload` as seen from `reference`.
    fn key(&self, payload: &P, reference: &R) -> Self::Key;

    /// Updates `reference` after `served` has been dispatched.
    fn advance(&self, reference: &mut R, served: &P);
}

/// Absolute floor distance; serving a floor moves the reference there.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorDistance;

impl DistanceRule<i32, i32> for FloorDistance {
    type Key = u32;

    fn name(&self) -> &str {
        "FloorDistance"
    }

    fn key(&self, floor: &i32, current: &i32) -> u32 {
        floor.abs_diff(*current)
    }

    fn advance(&self, current: &mut i32, served: &i32) {
        *current = *served;
    }
}
