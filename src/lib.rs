//! Configurable binary-heap priority queues.
//!
//! One array-backed heap engine covers every priority-queue variant:
//!
//! - **Incremental mode** ([`heap::PriorityHeap`]): classic sift-up /
//!   sift-down maintenance with max or min ordering, FIFO or LIFO
//!   tie-breaking on an insertion sequence, optional key policies (e.g. a
//!   bounded 0–100 scale), and O(n) priority updates by payload identity.
//! - **Rebuild mode** ([`rebuild::RebuildQueue`]): keys derived from a
//!   moving reference state (distance to the current floor) are recomputed
//!   and re-heapified on every query.
//! - **Thread-safe wrapper** ([`sync::SyncHeap`]): scoped mutex acquisition
//!   per public call.
//! - **Ready-made queues** ([`queues`]): task dispatch, event scheduling,
//!   alerts, triage and elevator dispatch.
//!
//! # Architecture
//!
//! No I/O happens inside the crate. Failures are returned as
//! [`HeapError`] before any write to the heap array; querying an empty
//! structure returns `None`, never an error.

pub mod error;
pub mod heap;
pub mod queues;
pub mod rebuild;
pub mod sync;

pub use error::HeapError;
