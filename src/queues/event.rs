//! Event scheduler: earliest date first.

use crate::error::HeapError;
use crate::heap::PriorityHeap;

/// Schedules events keyed by a sortable date (e.g. `YYYYMMDD`).
#[derive(Debug)]
pub struct EventScheduler {
    heap: PriorityHeap<u32, String>,
}

impl Default for EventScheduler {
    fn default() -> Self {
        Self {
            heap: PriorityHeap::min(),
        }
    }
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, date: u32, name: impl Into<String>) -> Result<(), HeapError> {
        self.heap.insert(date, name.into()).map(|_| ())
    }

    /// The nearest event without removing it.
    pub fn peek_event(&self) -> Option<(u32, &str)> {
        self.heap.peek().map(|e| (e.key, e.payload.as_str()))
    }

    /// Removes and returns the nearest event.
    pub fn next_event(&mut self) -> Option<(u32, String)> {
        self.heap.extract().map(|e| e.into_parts())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
