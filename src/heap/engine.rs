//! Incremental-mode priority heap.

use std::borrow::Borrow;
use std::fmt;

use tracing::{debug, trace};

use super::config::HeapConfig;
use super::sift::{self, Precedence};
use super::types::{AcceptAll, Entry, HeapKey, KeyPolicy};
use crate::error::HeapError;

/// Binary heap with configurable ordering, tie-break and key policy.
///
/// Every mutation validates its input before the first write to the
/// backing array, so a failed call never breaks the heap invariant.
///
/// # Examples
///
/// ```
/// use u_prioheap::heap::PriorityHeap;
///
/// let mut heap = PriorityHeap::max();
/// for (key, name) in [(5, "Lucía"), (3, "Pedro"), (10, "Jorge"), (7, "María")] {
///     heap.insert(key, name.to_string()).unwrap();
/// }
/// assert_eq!(heap.peek().map(|e| e.key), Some(10));
///
/// heap.update_key("Pedro", 12).unwrap();
/// assert_eq!(heap.extract().map(|e| e.payload).as_deref(), Some("Pedro"));
/// ```
///
/// # Bounded keys
///
/// ```
/// use u_prioheap::heap::{BoundedRange, PriorityHeap};
/// use u_prioheap::HeapError;
///
/// let mut alerts = PriorityHeap::max_with_policy(BoundedRange::new(0.0, 100.0));
/// assert!(matches!(alerts.insert(150.0, "X"), Err(HeapError::InvalidKey { .. })));
/// assert!(alerts.is_empty());
/// ```
pub struct PriorityHeap<K, P> {
    data: Vec<Entry<K, P>>,
    precedence: Precedence,
    policy: Box<dyn KeyPolicy<K>>,
    next_sequence: u64,
    config: HeapConfig,
}

impl<K: HeapKey, P> PriorityHeap<K, P> {
    /// Creates a heap from a validated configuration.
    pub fn with_config(config: HeapConfig) -> Result<Self, HeapError> {
        config.validate().map_err(HeapError::InvalidConfig)?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: HeapConfig) -> Self {
        Self {
            data: Vec::with_capacity(config.initial_capacity),
            precedence: Precedence::from_config(&config),
            policy: Box::new(AcceptAll),
            next_sequence: 0,
            config,
        }
    }

    /// Max-ordered heap, earlier insertion wins ties.
    pub fn max() -> Self {
        Self::from_valid_config(HeapConfig::max())
    }

    /// Min-ordered heap, earlier insertion wins ties.
    pub fn min() -> Self {
        Self::from_valid_config(HeapConfig::min())
    }

    /// Empty max-ordered heap guarded by `policy`.
    pub fn max_with_policy<T: KeyPolicy<K> + 'static>(policy: T) -> Self {
        let mut heap = Self::max();
        heap.policy = Box::new(policy);
        heap
    }

    /// Empty min-ordered heap guarded by `policy`.
    pub fn min_with_policy<T: KeyPolicy<K> + 'static>(policy: T) -> Self {
        let mut heap = Self::min();
        heap.policy = Box::new(policy);
        heap
    }

    /// Replaces the key policy (default: [`AcceptAll`]).
    ///
    /// Every stored key is checked against the new policy first.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidKey`] for the first stored key the policy
    /// rejects; the heap is dropped unchanged with its old policy.
    pub fn with_policy<T: KeyPolicy<K> + 'static>(
        mut self,
        policy: T,
    ) -> Result<Self, HeapError> {
        for entry in &self.data {
            policy.check(&entry.key).map_err(|reason| {
                debug!(policy = policy.name(), %reason, "stored key rejected by new policy");
                HeapError::invalid_key(reason)
            })?;
        }
        self.policy = Box::new(policy);
        Ok(self)
    }

    /// Builds a heap from `(key, payload)` pairs with one O(n) heapify pass.
    ///
    /// Sequences follow iteration order. Construction fails on the first
    /// key rejected by the policy or the comparability check.
    pub fn from_entries<I>(
        config: HeapConfig,
        policy: impl KeyPolicy<K> + 'static,
        items: I,
    ) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (K, P)>,
    {
        let mut heap = Self::with_config(config)?.with_policy(policy)?;
        for (key, payload) in items {
            heap.validate_key(&key)?;
            let sequence = heap.bump_sequence();
            heap.data.push(Entry {
                key,
                sequence,
                payload,
            });
        }
        sift::heapify(&mut heap.data, &heap.precedence);
        trace!(len = heap.data.len(), "heap built from entries");
        Ok(heap)
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Returns the name of the active key policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every entry. The sequence counter keeps advancing.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Entries in array order (not priority order).
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, P>> {
        self.data.iter()
    }

    /// Inserts `payload` under `key` and returns its sequence number.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidKey`] if the key is not comparable or the policy
    /// rejects it; the heap is unchanged.
    pub fn insert(&mut self, key: K, payload: P) -> Result<u64, HeapError> {
        self.validate_key(&key)?;
        let sequence = self.bump_sequence();
        self.data.push(Entry {
            key,
            sequence,
            payload,
        });
        let last = self.data.len() - 1;
        let pos = sift::sift_up(&mut self.data, last, &self.precedence);
        trace!(sequence, pos, len = self.data.len(), "insert");
        self.debug_check();
        Ok(sequence)
    }

    /// Returns the highest-priority entry without removing it.
    pub fn peek(&self) -> Option<&Entry<K, P>> {
        self.data.first()
    }

    /// Removes and returns the highest-priority entry.
    pub fn extract(&mut self) -> Option<Entry<K, P>> {
        if self.data.is_empty() {
            return None;
        }
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift::sift_down(&mut self.data, 0, &self.precedence);
        }
        trace!(sequence = top.sequence, len = self.data.len(), "extract");
        self.debug_check();
        Some(top)
    }

    /// Whether an entry whose payload equals `id` is present.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position_of(id).is_some()
    }

    /// Changes the key of the entry whose payload equals `id`.
    ///
    /// The lookup is a linear scan. The sequence number is preserved, so the
    /// entry keeps its original tie-break position.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidKey`] for a rejected key, [`HeapError::NotFound`]
    /// when no payload matches. Neither case mutates the heap.
    pub fn update_key<Q>(&mut self, id: &Q, new_key: K) -> Result<(), HeapError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.validate_key(&new_key)?;
        let Some(idx) = self.position_of(id) else {
            debug!("update_key: no matching payload");
            return Err(HeapError::NotFound);
        };
        self.data[idx].key = new_key;
        sift::repair(&mut self.data, idx, &self.precedence);
        trace!(idx, "update_key");
        self.debug_check();
        Ok(())
    }

    /// Removes the entry whose payload equals `id` and returns it.
    ///
    /// # Errors
    ///
    /// [`HeapError::NotFound`] when no payload matches.
    pub fn remove_by_id<Q>(&mut self, id: &Q) -> Result<Entry<K, P>, HeapError>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(idx) = self.position_of(id) else {
            debug!("remove_by_id: no matching payload");
            return Err(HeapError::NotFound);
        };
        let removed = self.data.swap_remove(idx);
        if idx < self.data.len() {
            sift::repair(&mut self.data, idx, &self.precedence);
        }
        trace!(sequence = removed.sequence, "remove_by_id");
        self.debug_check();
        Ok(removed)
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, P>> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.extract() {
            out.push(entry);
        }
        out
    }

    /// Checks the heap invariant over the whole array.
    pub fn is_valid_heap(&self) -> bool {
        sift::is_heap(&self.data, &self.precedence)
    }

    fn position_of<Q>(&self, id: &Q) -> Option<usize>
    where
        P: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.data.iter().position(|e| e.payload.borrow() == id)
    }

    fn validate_key(&self, key: &K) -> Result<(), HeapError> {
        if !key.is_comparable() {
            debug!("rejected key: not comparable");
            return Err(HeapError::invalid_key("key is not comparable"));
        }
        self.policy.check(key).map_err(|reason| {
            debug!(policy = self.policy.name(), %reason, "rejected key");
            HeapError::invalid_key(reason)
        })
    }

    fn bump_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.is_valid_heap(), "heap invariant violated");
    }
}

impl<K: HeapKey, P> Default for PriorityHeap<K, P> {
    fn default() -> Self {
        Self::max()
    }
}

impl<K: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityHeap<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("config", &self.config)
            .field("policy", &self.policy.name())
            .field("next_sequence", &self.next_sequence)
            .field("data", &self.data)
            .finish()
    }
}

impl<'a, K, P> IntoIterator for &'a PriorityHeap<K, P> {
    type Item = &'a Entry<K, P>;
    type IntoIter = std::slice::Iter<'a, Entry<K, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
