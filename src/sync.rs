//! Thread-safe wrapper around [`PriorityHeap`].
//!
//! Each public method acquires the lock for the duration of that single
//! call and releases it on every exit path, including rejected keys. The
//! lock is never held across two calls and there is one lock per heap, so
//! there is no lock-ordering hazard.

use std::borrow::Borrow;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::HeapError;
use crate::heap::{Entry, HeapKey, PriorityHeap};

/// A [`PriorityHeap`] shareable across threads (e.g. behind an `Arc`).
///
/// Queries return owned clones because a reference cannot outlive the
/// lock guard.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use u_prioheap::heap::PriorityHeap;
/// use u_prioheap::sync::SyncHeap;
///
/// let heap = Arc::new(SyncHeap::new(PriorityHeap::max()));
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let heap = Arc::clone(&heap);
///         thread::spawn(move || {
///             for i in 0..25 {
///                 heap.insert(t * 100 + i, t).unwrap();
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(heap.len(), 100);
/// assert_eq!(heap.peek().map(|e| e.key), Some(324));
/// ```
#[derive(Debug)]
pub struct SyncHeap<K, P> {
    inner: Mutex<PriorityHeap<K, P>>,
}

impl<K: HeapKey, P> SyncHeap<K, P> {
    pub fn new(heap: PriorityHeap<K, P>) -> Self {
        Self {
            inner: Mutex::new(heap),
        }
    }

    /// Acquires the guard for one public call.
    ///
    /// Mutations validate before their first write, so a poisoned heap
    /// still satisfies the invariant and is recovered rather than
    /// propagated.
    fn lock(&self) -> MutexGuard<'_, PriorityHeap<K, P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, key: K, payload: P) -> Result<u64, HeapError> {
        self.lock().insert(key, payload)
    }

    pub fn extract(&self) -> Option<Entry<K, P>> {
        self.lock().extract()
    }

    pub fn update_key<Q>(&self, id: &Q, new_key: K) -> Result<(), HeapError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.lock().update_key(id, new_key)
    }

    pub fn remove_by_id<Q>(&self, id: &Q) -> Result<Entry<K, P>, HeapError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.lock().remove_by_id(id)
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_valid_heap(&self) -> bool {
        self.lock().is_valid_heap()
    }

    /// Consumes the wrapper and returns the heap.
    pub fn into_inner(self) -> PriorityHeap<K, P> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: HeapKey + Clone, P: Clone> SyncHeap<K, P> {
    /// Clone of the highest-priority entry.
    pub fn peek(&self) -> Option<Entry<K, P>> {
        self.lock().peek().cloned()
    }
}

impl<K: HeapKey, P> From<PriorityHeap<K, P>> for SyncHeap<K, P> {
    fn from(heap: PriorityHeap<K, P>) -> Self {
        Self::new(heap)
    }
}
