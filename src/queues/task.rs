//! IT task dispatch queue: highest numeric priority first.

use crate::error::HeapError;
use crate::heap::PriorityHeap;

/// Task queue over a max-ordered heap with FIFO tie-break.
///
/// Priorities may be integral or fractional; NaN is rejected.
#[derive(Debug, Default)]
pub struct TaskQueue {
    heap: PriorityHeap<f64, String>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(
        &mut self,
        priority: f64,
        description: impl Into<String>,
    ) -> Result<(), HeapError> {
        self.heap.insert(priority, description.into()).map(|_| ())
    }

    /// Description of the most urgent task.
    pub fn peek(&self) -> Option<&str> {
        self.heap.peek().map(|e| e.payload.as_str())
    }

    /// Removes the most urgent task, returning `(priority, description)`.
    pub fn process_task(&mut self) -> Option<(f64, String)> {
        self.heap.extract().map(|e| e.into_parts())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
