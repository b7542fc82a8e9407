//! Incremental-mode binary heap.
//!
//! A single engine covers every stored-key priority queue: ordering
//! (max or min), tie-break (FIFO or LIFO on the insertion sequence) and
//! key validation are configuration, not separate types.
//!
//! # Key Types
//!
//! - [`PriorityHeap`]: insert / peek / extract / update_key / remove_by_id
//! - [`HeapConfig`]: ordering, tie-break and initial capacity
//! - [`Entry`]: `(key, sequence, payload)` triple stored in the array
//! - [`HeapKey`]: comparability contract for keys (NaN is rejected)
//! - [`KeyPolicy`]: domain validation hook ([`AcceptAll`], [`BoundedRange`])
//! - [`Precedence`]: the `(key, sequence)` comparator shared with
//!   [`rebuild`](crate::rebuild)
//!
//! # References
//!
//! - Williams (1964), "Algorithm 232: Heapsort"
//! - Floyd (1964), "Algorithm 245: Treesort 3" (bottom-up heap construction)

mod config;
mod engine;
pub(crate) mod sift;
mod types;

pub use config::{HeapConfig, HeapOrder, TieBreak, MAX_INITIAL_CAPACITY};
pub use engine::PriorityHeap;
pub use sift::Precedence;
pub use types::{AcceptAll, BoundedRange, Entry, HeapKey, KeyPolicy};
