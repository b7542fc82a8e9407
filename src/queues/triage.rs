//! Emergency-room triage: highest urgency first, urgency can change.

use tracing::debug;

use crate::error::HeapError;
use crate::heap::PriorityHeap;

/// Patient queue keyed by urgency. Patient names are unique so that
/// [`update_priority`](TriageQueue::update_priority) can find them.
#[derive(Debug, Default)]
pub struct TriageQueue {
    heap: PriorityHeap<i32, String>,
}

impl TriageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a patient.
    ///
    /// # Errors
    ///
    /// [`HeapError::DuplicateId`] if a patient with this name is waiting.
    pub fn insert(&mut self, urgency: i32, name: impl Into<String>) -> Result<(), HeapError> {
        let name = name.into();
        if self.heap.contains(name.as_str()) {
            debug!(%name, "patient already queued");
            return Err(HeapError::DuplicateId(name));
        }
        self.heap.insert(urgency, name).map(|_| ())
    }

    pub fn peek_max(&self) -> Option<(i32, &str)> {
        self.heap.peek().map(|e| (e.key, e.payload.as_str()))
    }

    pub fn extract_max(&mut self) -> Option<(i32, String)> {
        self.heap.extract().map(|e| e.into_parts())
    }

    /// Re-grades a waiting patient. Both raising and lowering are allowed.
    ///
    /// # Errors
    ///
    /// [`HeapError::NotFound`] if no patient has this name.
    pub fn update_priority(&mut self, name: &str, urgency: i32) -> Result<(), HeapError> {
        self.heap.update_key(name, urgency)
    }

    /// Discharges a patient without treating them.
    pub fn remove(&mut self, name: &str) -> Result<i32, HeapError> {
        self.heap.remove_by_id(name).map(|e| e.key)
    }

    /// Waiting patients as `(urgency, name)`, most urgent first.
    pub fn remaining(&self) -> Vec<(i32, &str)> {
        let mut waiting: Vec<_> = self
            .heap
            .iter()
            .map(|e| (e.key, e.sequence, e.payload.as_str()))
            .collect();
        waiting.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        waiting.into_iter().map(|(k, _, name)| (k, name)).collect()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ward() -> TriageQueue {
        let mut pq = TriageQueue::new();
        pq.insert(5, "Lucía").unwrap();
        pq.insert(3, "Pedro").unwrap();
        pq.insert(10, "Jorge").unwrap();
        pq.insert(7, "María").unwrap();
        pq
    }

    #[test]
    fn test_update_then_reorder() {
        let mut pq = ward();
        assert_eq!(pq.peek_max(), Some((10, "Jorge")));
        assert_eq!(pq.extract_max(), Some((10, "Jorge".to_string())));
        assert_eq!(pq.peek_max(), Some((7, "María")));

        pq.update_priority("Pedro", 9).unwrap();
        assert_eq!(pq.peek_max(), Some((9, "Pedro")));
        assert_eq!(pq.extract_max(), Some((9, "Pedro".to_string())));

        assert_eq!(pq.remaining(), vec![(7, "María"), (5, "Lucía")]);
    }

    #[test]
    fn test_update_unknown_patient() {
        let mut pq = ward();
        assert_eq!(pq.update_priority("Nadie", 1), Err(HeapError::NotFound));
        assert_eq!(pq.len(), 4);
        assert_eq!(pq.peek_max(), Some((10, "Jorge")));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut pq = ward();
        assert_eq!(
            pq.insert(1, "Pedro"),
            Err(HeapError::DuplicateId("Pedro".into()))
        );
        assert_eq!(pq.len(), 4);
    }

    #[test]
    fn test_lowering_urgency() {
        let mut pq = ward();
        pq.update_priority("Jorge", 0).unwrap();
        assert_eq!(pq.peek_max(), Some((7, "María")));
        assert_eq!(pq.remaining().last(), Some(&(0, "Jorge")));
    }

    #[test]
    fn test_remove_patient() {
        let mut pq = ward();
        assert_eq!(pq.remove("María"), Ok(7));
        assert_eq!(pq.remove("María"), Err(HeapError::NotFound));
        assert_eq!(pq.len(), 3);
    }

    #[test]
    fn test_empty_queue() {
        let mut pq = TriageQueue::new();
        assert!(pq.peek_max().is_none());
        assert!(pq.extract_max().is_none());
        assert!(pq.remaining().is_empty());
    }
}
