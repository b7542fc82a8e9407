//! Heap configuration: ordering strategy and tie-break policy.

/// Which end of the key range sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapOrder {
    /// Largest key has the highest priority (task queue, alerts, triage).
    #[default]
    Max,

    /// Smallest key has the highest priority (event dates, distances).
    Min,
}

/// How entries with equal keys are ordered.
///
/// The tie-break compares the insertion `sequence`, which is unique per
/// heap, so extraction order is fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Earlier insertion wins (smaller sequence has priority).
    #[default]
    Fifo,

    /// Later insertion wins (larger sequence has priority).
    Lifo,
}

/// Upper bound accepted for [`HeapConfig::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Configuration shared by [`PriorityHeap`](super::PriorityHeap) and
/// [`RebuildQueue`](crate::rebuild::RebuildQueue).
///
/// # Examples
///
/// ```
/// use u_prioheap::heap::{HeapConfig, HeapOrder, TieBreak};
///
/// let config = HeapConfig::default()
///     .with_order(HeapOrder::Min)
///     .with_tie_break(TieBreak::Fifo)
///     .with_initial_capacity(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapConfig {
    /// Max- or min-ordering on the primary key.
    pub order: HeapOrder,

    /// Ordering among equal keys.
    pub tie_break: TieBreak,

    /// Slots reserved up front for the backing array.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            order: HeapOrder::Max,
            tie_break: TieBreak::Fifo,
            initial_capacity: 0,
        }
    }
}

impl HeapConfig {
    /// Max-ordered FIFO configuration.
    pub fn max() -> Self {
        Self::default()
    }

    /// Min-ordered FIFO configuration.
    pub fn min() -> Self {
        Self::default().with_order(HeapOrder::Min)
    }

    pub fn with_order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(format!(
                "initial_capacity must be at most {MAX_INITIAL_CAPACITY}, got {}",
                self.initial_capacity
            ));
        }
        Ok(())
    }
}
