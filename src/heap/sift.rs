//! Array-backed binary heap primitives.
//!
//! The heap is a dense zero-indexed slice: for index `i`, children sit at
//! `2i + 1` and `2i + 2`, the parent at `(i - 1) / 2`. Both the incremental
//! engine and the rebuild-on-query queue repair their arrays through these
//! functions, so they share one comparison path.

use std::cmp::Ordering;

use super::config::{HeapConfig, HeapOrder, TieBreak};
use super::types::{Entry, HeapKey};

/// Total order over `(key, sequence)` pairs.
///
/// [`compare`](Precedence::compare) returns `Greater` when the first entry
/// has priority, `Less` when the second does, and `Equal` only for an
/// entry compared with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    order: HeapOrder,
    tie_break: TieBreak,
}

impl Precedence {
    pub fn new(order: HeapOrder, tie_break: TieBreak) -> Self {
        Self { order, tie_break }
    }

    pub fn from_config(config: &HeapConfig) -> Self {
        Self::new(config.order, config.tie_break)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Compares two keys under the configured ordering alone.
    pub fn compare_keys<K: HeapKey>(&self, a: &K, b: &K) -> Ordering {
        let raw = a.compare_keys(b);
        match self.order {
            HeapOrder::Max => raw,
            HeapOrder::Min => raw.reverse(),
        }
    }

    /// Compares two entries on `(key, sequence)`; the payload is ignored.
    pub fn compare<K: HeapKey, P>(&self, a: &Entry<K, P>, b: &Entry<K, P>) -> Ordering {
        self.compare_keys(&a.key, &b.key).then_with(|| {
            let seq = a.sequence.cmp(&b.sequence);
            match self.tie_break {
                TieBreak::Fifo => seq.reverse(),
                TieBreak::Lifo => seq,
            }
        })
    }

    /// Whether `a` strictly has priority over `b`.
    #[inline]
    pub fn dominates<K: HeapKey, P>(&self, a: &Entry<K, P>, b: &Entry<K, P>) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl Default for Precedence {
    fn default() -> Self {
        Self::new(HeapOrder::Max, TieBreak::Fifo)
    }
}

/// Moves the entry at `idx` toward the root while it dominates its parent.
///
/// Returns the final index of the entry.
pub(crate) fn sift_up<K: HeapKey, P>(
    data: &mut [Entry<K, P>],
    mut idx: usize,
    prec: &Precedence,
) -> usize {
    while idx > 0 {
        let parent = (idx - 1) / 2;
        if prec.dominates(&data[idx], &data[parent]) {
            data.swap(idx, parent);
            idx = parent;
        } else {
            break;
        }
    }
    idx
}

/// Moves the entry at `idx` toward the leaves while a child dominates it.
///
/// Returns the final index of the entry.
pub(crate) fn sift_down<K: HeapKey, P>(
    data: &mut [Entry<K, P>],
    mut idx: usize,
    prec: &Precedence,
) -> usize {
    let len = data.len();
    loop {
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;
        let mut best = idx;

        if left < len && prec.dominates(&data[left], &data[best]) {
            best = left;
        }
        if right < len && prec.dominates(&data[right], &data[best]) {
            best = right;
        }

        if best == idx {
            return idx;
        }
        data.swap(idx, best);
        idx = best;
    }
}

/// Restores the invariant around `idx` after its key changed in place.
///
/// At most one of the two walks performs any swap.
pub(crate) fn repair<K: HeapKey, P>(data: &mut [Entry<K, P>], idx: usize, prec: &Precedence) {
    let idx = sift_up(data, idx, prec);
    sift_down(data, idx, prec);
}

/// Bottom-up heap construction in O(n).
pub(crate) fn heapify<K: HeapKey, P>(data: &mut [Entry<K, P>], prec: &Precedence) {
    if data.len() <= 1 {
        return;
    }
    let last_parent = (data.len() - 2) / 2;
    for i in (0..=last_parent).rev() {
        sift_down(data, i, prec);
    }
}

/// Whether every non-root entry is dominated by its parent.
pub(crate) fn is_heap<K: HeapKey, P>(data: &[Entry<K, P>], prec: &Precedence) -> bool {
    (1..data.len()).all(|i| !prec.dominates(&data[i], &data[(i - 1) / 2]))
}
