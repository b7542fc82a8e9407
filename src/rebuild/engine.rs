//! Rebuild-on-query queue.

use std::marker::PhantomData;

use tracing::{debug, trace};

use super::types::{DistanceRule, Request};
use crate::error::HeapError;
use crate::heap::sift::{self, Precedence};
use crate::heap::{Entry, HeapConfig, HeapKey};

/// Priority queue whose keys are derived from a moving reference state.
///
/// The request set is the source of truth. Each query recomputes every
/// key against the reference, heapifies a fresh array and reads its root;
/// the array is discarded afterwards.
///
/// # Examples
///
/// ```
/// use u_prioheap::rebuild::{FloorDistance, RebuildQueue};
///
/// let mut queue = RebuildQueue::new(FloorDistance);
/// for floor in [2, 8, 3, 10, 4] {
///     queue.request(floor);
/// }
///
/// let mut current = 5;
/// assert_eq!(queue.next_stop(&mut current), Some(4));
/// assert_eq!(current, 4);
/// assert_eq!(queue.next_stop(&mut current), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct RebuildQueue<P, R, D> {
    requests: Vec<Request<P>>,
    rule: D,
    precedence: Precedence,
    next_sequence: u64,
    _reference: PhantomData<fn(&R)>,
}

impl<P, R, D> RebuildQueue<P, R, D>
where
    D: DistanceRule<P, R>,
{
    /// Min-ordered queue (smallest derived key first), FIFO on ties.
    pub fn new(rule: D) -> Self {
        Self::from_valid_config(rule, HeapConfig::min())
    }

    /// Creates a queue from a validated configuration.
    pub fn with_config(rule: D, config: HeapConfig) -> Result<Self, HeapError> {
        config.validate().map_err(HeapError::InvalidConfig)?;
        Ok(Self::from_valid_config(rule, config))
    }

    fn from_valid_config(rule: D, config: HeapConfig) -> Self {
        Self {
            requests: Vec::with_capacity(config.initial_capacity),
            rule,
            precedence: Precedence::from_config(&config),
            next_sequence: 0,
            _reference: PhantomData,
        }
    }

    pub fn rule(&self) -> &D {
        &self.rule
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Pending requests in arrival order.
    pub fn pending(&self) -> &[Request<P>] {
        &self.requests
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }

    /// Records a request and returns its sequence number. O(1).
    pub fn request(&mut self, payload: P) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.requests.push(Request { sequence, payload });
        trace!(sequence, pending = self.requests.len(), "request");
        sequence
    }

    /// Withdraws a pending request by sequence.
    ///
    /// # Errors
    ///
    /// [`HeapError::NotFound`] if the sequence is not pending.
    pub fn cancel(&mut self, sequence: u64) -> Result<P, HeapError> {
        let pos = self
            .requests
            .iter()
            .position(|r| r.sequence == sequence)
            .ok_or(HeapError::NotFound)?;
        Ok(self.requests.remove(pos).payload)
    }

    /// Returns the request that would be served next from `reference`.
    pub fn peek_next(&self, reference: &R) -> Option<&P> {
        let heap = self.rebuild(reference);
        heap.first().map(|root| &self.requests[root.payload].payload)
    }

    /// Serves the nearest request: removes it from the request set and
    /// advances `reference` through the rule.
    ///
    /// Returns `None` when no pending request has a comparable key from
    /// `reference`. Requests with a non-comparable key (e.g. NaN) stay
    /// pending, so `None` does not imply [`is_empty`](Self::is_empty).
    pub fn next_stop(&mut self, reference: &mut R) -> Option<P> {
        let sequence = self.rebuild(reference).first()?.sequence;
        let pos = self.requests.iter().position(|r| r.sequence == sequence)?;
        let served = self.requests.remove(pos);
        self.rule.advance(reference, &served.payload);
        trace!(sequence, pending = self.requests.len(), "next_stop");
        Some(served.payload)
    }

    /// Serves pending requests in order until none has a comparable key,
    /// and returns the route.
    ///
    /// Requests whose key is not comparable from the reference reached at
    /// the end remain in [`pending`](Self::pending); the caller can
    /// [`cancel`](Self::cancel) them.
    pub fn drain_route(&mut self, reference: &mut R) -> Vec<P> {
        let mut route = Vec::with_capacity(self.requests.len());
        while let Some(stop) = self.next_stop(reference) {
            route.push(stop);
        }
        route
    }

    /// Recomputes all keys and heapifies. The payload of each heap entry is
    /// the index of its request in `self.requests`.
    ///
    /// Requests whose derived key is not comparable are left out of this
    /// query but stay pending.
    fn rebuild(&self, reference: &R) -> Vec<Entry<D::Key, usize>> {
        let mut heap: Vec<Entry<D::Key, usize>> = Vec::with_capacity(self.requests.len());
        for (idx, req) in self.requests.iter().enumerate() {
            let key = self.rule.key(&req.payload, reference);
            if !key.is_comparable() {
                debug!(
                    rule = self.rule.name(),
                    sequence = req.sequence,
                    "skipping request with non-comparable key"
                );
                continue;
            }
            heap.push(Entry {
                key,
                sequence: req.sequence,
                payload: idx,
            });
        }
        sift::heapify(&mut heap, &self.precedence);
        debug_assert!(sift::is_heap(&heap, &self.precedence));
        trace!(len = heap.len(), rule = self.rule.name(), "rebuild");
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::{HeapOrder, TieBreak};
    use crate::rebuild::FloorDistance;

    fn elevator(floors: &[i32]) -> RebuildQueue<i32, i32, FloorDistance> {
        let mut queue = RebuildQueue::new(FloorDistance);
        for &f in floors {
            queue.request(f);
        }
        queue
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = elevator(&[]);
        let mut current = 5;
        assert!(queue.peek_next(&current).is_none());
        assert!(queue.next_stop(&mut current).is_none());
        assert_eq!(current, 5);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_nearest_first() {
        let mut queue = elevator(&[2, 8, 3, 10, 4]);
        let mut current = 5;
        assert_eq!(queue.peek_next(&current), Some(&4));
        assert_eq!(queue.next_stop(&mut current), Some(4));
        assert_eq!(current, 4);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_recomputes_from_new_position() {
        let mut queue = elevator(&[2, 8, 3, 10, 4]);
        let mut current = 5;
        queue.next_stop(&mut current);
        // From 4: floor 3 is 1 away, floor 8 would have been 3 away from 5
        assert_eq!(queue.peek_next(&current), Some(&3));
        assert_eq!(queue.next_stop(&mut current), Some(3));
        assert_eq!(queue.next_stop(&mut current), Some(2));
        assert_eq!(queue.next_stop(&mut current), Some(8));
        assert_eq!(queue.next_stop(&mut current), Some(10));
        assert!(queue.next_stop(&mut current).is_none());
        assert_eq!(current, 10);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let queue = elevator(&[7, 1]);
        assert_eq!(queue.peek_next(&0), Some(&1));
        assert_eq!(queue.peek_next(&0), Some(&1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_distance_tie_fifo() {
        let mut queue = elevator(&[7, 3]);
        let mut current = 5;
        assert_eq!(queue.next_stop(&mut current), Some(7));
    }

    #[test]
    fn test_distance_tie_lifo() {
        let config = HeapConfig::min().with_tie_break(TieBreak::Lifo);
        let mut queue = RebuildQueue::with_config(FloorDistance, config).unwrap();
        queue.request(7);
        queue.request(3);
        let mut current = 5;
        assert_eq!(queue.next_stop(&mut current), Some(3));
    }

    #[test]
    fn test_duplicate_floors_removed_by_sequence() {
        let mut queue = elevator(&[6, 6, 9]);
        let mut current = 5;
        assert_eq!(queue.next_stop(&mut current), Some(6));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending()[0].sequence, 1);
        assert_eq!(queue.next_stop(&mut current), Some(6));
        assert_eq!(queue.next_stop(&mut current), Some(9));
    }

    #[test]
    fn test_max_order_serves_farthest() {
        let config = HeapConfig::default().with_order(HeapOrder::Max);
        let mut queue = RebuildQueue::with_config(FloorDistance, config).unwrap();
        queue.request(4);
        queue.request(12);
        let mut current = 5;
        assert_eq!(queue.next_stop(&mut current), Some(12));
    }

    #[test]
    fn test_cancel() {
        let mut queue = elevator(&[2, 9]);
        let seq = queue.pending()[1].sequence;
        assert_eq!(queue.cancel(seq), Ok(9));
        assert_eq!(queue.cancel(seq), Err(HeapError::NotFound));
        assert_eq!(queue.drain_route(&mut 0), vec![2]);
    }

    #[test]
    fn test_drain_route() {
        let mut queue = elevator(&[2, 8, 3, 10, 4]);
        let mut current = 5;
        assert_eq!(queue.drain_route(&mut current), vec![4, 3, 2, 8, 10]);
        assert!(queue.is_empty());
    }

    struct Weighted;

    impl DistanceRule<f64, f64> for Weighted {
        type Key = f64;
        fn name(&self) -> &str {
            "Weighted"
        }
        fn key(&self, payload: &f64, reference: &f64) -> f64 {
            (payload - reference).abs()
        }
        fn advance(&self, reference: &mut f64, served: &f64) {
            *reference = *served;
        }
    }

    #[test]
    fn test_non_comparable_keys_skipped() {
        let mut queue = RebuildQueue::new(Weighted);
        queue.request(f64::NAN);
        queue.request(3.0);
        let mut current = 0.0;
        assert_eq!(queue.next_stop(&mut current), Some(3.0));
        assert_eq!(queue.len(), 1);
        assert!(queue.next_stop(&mut current).is_none());
    }

    #[test]
    fn test_drain_route_leaves_non_comparable_pending() {
        let mut queue = RebuildQueue::new(Weighted);
        queue.request(1.0);
        let stranded = queue.request(f64::NAN);
        queue.request(4.0);
        let mut current = 0.0;
        assert_eq!(queue.drain_route(&mut current), vec![1.0, 4.0]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pending()[0].sequence, stranded);
        assert!(queue.cancel(stranded).is_ok_and(|p| p.is_nan()));
        assert!(queue.is_empty());
    }
}
