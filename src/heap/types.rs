//! Entries, key comparability, and key policies.

use std::cmp::Ordering;
use std::fmt;

/// The unit stored in a heap.
///
/// `sequence` is assigned at insertion from a monotonically increasing
/// counter and is never reused, so no two live entries compare as fully
/// tied. `payload` is carried but never compared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, P> {
    /// Primary comparison key.
    pub key: K,
    /// Insertion counter used only to break ties on `key`.
    pub sequence: u64,
    /// Opaque caller data.
    pub payload: P,
}

impl<K, P> Entry<K, P> {
    /// Splits the entry into `(key, payload)`, dropping the sequence.
    pub fn into_parts(self) -> (K, P) {
        (self.key, self.payload)
    }
}

/// A key that can be totally ordered once validated.
///
/// Integer and string keys are always comparable. Floating-point keys
/// reject NaN through [`is_comparable`](HeapKey::is_comparable), which
/// every mutating heap operation checks before touching the array.
pub trait HeapKey {
    /// Compares two keys that both passed [`is_comparable`](HeapKey::is_comparable).
    fn compare_keys(&self, other: &Self) -> Ordering;

    /// Whether this key participates in a total order.
    fn is_comparable(&self) -> bool {
        true
    }

    /// Numeric comparison used for range checks.
    ///
    /// Differs from [`compare_keys`](HeapKey::compare_keys) only for floats,
    /// where `-0.0 == 0.0` and NaN is unordered.
    fn value_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_keys(other))
    }
}

macro_rules! impl_ord_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl HeapKey for $t {
                fn compare_keys(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_ord_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String,
);

macro_rules! impl_float_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl HeapKey for $t {
                fn compare_keys(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn is_comparable(&self) -> bool {
                    !self.is_nan()
                }

                fn value_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }
            }
        )*
    };
}

impl_float_key!(f32, f64);

impl<A: HeapKey, B: HeapKey> HeapKey for (A, B) {
    fn compare_keys(&self, other: &Self) -> Ordering {
        self.0
            .compare_keys(&other.0)
            .then_with(|| self.1.compare_keys(&other.1))
    }

    fn is_comparable(&self) -> bool {
        self.0.is_comparable() && self.1.is_comparable()
    }

    fn value_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.value_cmp(&other.0)? {
            Ordering::Equal => self.1.value_cmp(&other.1),
            ord => Some(ord),
        }
    }
}

/// Domain validation applied to every key before it enters a heap.
///
/// A policy runs after the comparability check and before any write, so
/// a rejected key never reaches the array.
///
/// # Examples
///
/// ```
/// use u_prioheap::heap::{BoundedRange, KeyPolicy};
///
/// let severity = BoundedRange::new(0.0_f64, 100.0);
/// assert!(severity.check(&42.0).is_ok());
/// assert!(severity.check(&150.0).is_err());
/// ```
pub trait KeyPolicy<K>: Send + Sync {
    /// Returns the name of this policy.
    fn name(&self) -> &str;

    /// Accepts the key or explains why it is rejected.
    fn check(&self, key: &K) -> Result<(), String>;
}

/// Accepts every comparable key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<K> KeyPolicy<K> for AcceptAll {
    fn name(&self) -> &str {
        "AcceptAll"
    }

    fn check(&self, _key: &K) -> Result<(), String> {
        Ok(())
    }
}

/// Accepts keys inside the closed interval `[min, max]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedRange<K> {
    min: K,
    max: K,
}

impl<K: HeapKey> BoundedRange<K> {
    /// Creates a closed range. The bounds are swapped if given out of order.
    pub fn new(min: K, max: K) -> Self {
        if min.compare_keys(&max) == Ordering::Greater {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> &K {
        &self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> &K {
        &self.max
    }

    /// Whether `key` lies inside the range. NaN never does.
    pub fn contains(&self, key: &K) -> bool {
        matches!(
            key.value_cmp(&self.min),
            Some(Ordering::Greater | Ordering::Equal)
        ) && matches!(
            key.value_cmp(&self.max),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

impl<K> KeyPolicy<K> for BoundedRange<K>
where
    K: HeapKey + fmt::Debug + Send + Sync,
{
    fn name(&self) -> &str {
        "BoundedRange"
    }

    fn check(&self, key: &K) -> Result<(), String> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(format!(
                "key {key:?} outside [{:?}, {:?}]",
                self.min, self.max
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_nan_not_comparable() {
        assert!(!f64::NAN.is_comparable());
        assert!(1.5_f64.is_comparable());
        assert!(!(3_i32, f32::NAN).is_comparable());
    }

    #[test]
    fn test_tuple_key_lexicographic() {
        assert_eq!((1, 5).compare_keys(&(2, 0)), Ordering::Less);
        assert_eq!((2, 5).compare_keys(&(2, 3)), Ordering::Greater);
    }

    #[test]
    fn test_bounded_range_inclusive() {
        let range = BoundedRange::new(0_i32, 100);
        assert!(range.check(&0).is_ok());
        assert!(range.check(&100).is_ok());
        assert!(range.check(&-1).is_err());
        assert!(range.check(&101).is_err());
    }

    #[test]
    fn test_bounded_range_signed_zero() {
        let range = BoundedRange::new(0.0_f64, 100.0);
        assert!(range.check(&-0.0).is_ok());
        assert!(range.check(&0.0).is_ok());
        assert!(range.check(&-f64::MIN_POSITIVE).is_err());
        assert!(range.check(&f64::NAN).is_err());

        let upper = BoundedRange::new(-100.0_f32, -0.0);
        assert!(upper.check(&0.0).is_ok());
    }

    #[test]
    fn test_bounded_range_swaps_bounds() {
        let range = BoundedRange::new(10_u8, 2);
        assert_eq!(*range.min(), 2);
        assert_eq!(*range.max(), 10);
    }

    #[test]
    fn test_bounded_range_reason() {
        let range = BoundedRange::new(0.0_f64, 100.0);
        let reason = range.check(&150.0).unwrap_err();
        assert!(reason.contains("150"), "unexpected reason: {reason}");
    }

    #[test]
    fn test_accept_all() {
        let policy = AcceptAll;
        assert!(KeyPolicy::<i64>::check(&policy, &i64::MIN).is_ok());
        assert_eq!(KeyPolicy::<i64>::name(&policy), "AcceptAll");
    }
}
