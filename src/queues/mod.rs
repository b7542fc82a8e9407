//! Ready-made queues built on the two engines.
//!
//! Each is a thin, independent consumer: none depends on another.
//!
//! | Queue | Engine | Order | Notes |
//! |---|---|---|---|
//! | [`TaskQueue`] | [`PriorityHeap`](crate::heap::PriorityHeap) | max | numeric priority, NaN rejected |
//! | [`EventScheduler`] | [`PriorityHeap`](crate::heap::PriorityHeap) | min | date key |
//! | [`AlertSystem`] | [`SyncHeap`](crate::sync::SyncHeap) | max | severity 0–100, thread-safe |
//! | [`TriageQueue`] | [`PriorityHeap`](crate::heap::PriorityHeap) | max | urgency updates by name |
//! | [`ElevatorDispatcher`] | [`RebuildQueue`](crate::rebuild::RebuildQueue) | min | distance to current floor |

mod alert;
mod elevator;
mod event;
mod task;
mod triage;

pub use alert::{AlertSystem, MAX_SEVERITY, MIN_SEVERITY};
pub use elevator::ElevatorDispatcher;
pub use event::EventScheduler;
pub use task::TaskQueue;
pub use triage::TriageQueue;
