//! Nearest-floor-first elevator dispatcher.

use crate::rebuild::{FloorDistance, RebuildQueue};

/// Serves the pending floor closest to the car, oldest request first on
/// equal distance. Distances are recomputed from the car's position on
/// every query.
#[derive(Debug, Clone)]
pub struct ElevatorDispatcher {
    queue: RebuildQueue<i32, i32, FloorDistance>,
    current: i32,
}

impl ElevatorDispatcher {
    pub fn new(start_floor: i32) -> Self {
        Self {
            queue: RebuildQueue::new(FloorDistance),
            current: start_floor,
        }
    }

    pub fn current_floor(&self) -> i32 {
        self.current
    }

    /// Registers a floor request.
    pub fn request_floor(&mut self, floor: i32) {
        self.queue.request(floor);
    }

    /// The floor that would be served next, without moving.
    pub fn peek_next(&self) -> Option<i32> {
        self.queue.peek_next(&self.current).copied()
    }

    /// Moves the car to the nearest pending floor and returns it.
    pub fn next_stop(&mut self) -> Option<i32> {
        self.queue.next_stop(&mut self.current)
    }

    /// Pending floors in request order.
    pub fn pending_floors(&self) -> Vec<i32> {
        self.queue.pending().iter().map(|r| r.payload).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
