//! Error taxonomy shared by every queue in the crate.
//!
//! Empty-collection queries are not errors: `peek`, `extract` and
//! `next_stop` return `None` on an empty structure.

/// Failure of a mutating heap operation.
///
/// Every variant is returned before the first write to the heap array,
/// so a failed call leaves the structure exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The key is not comparable (e.g. NaN) or violates the configured
    /// key policy (e.g. outside a bounded range).
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    /// No live entry matches the requested identity.
    #[error("entry not found")]
    NotFound,

    /// An entry with the same identity is already queued (queues that
    /// look entries up by payload require unique payloads).
    #[error("duplicate entry: {0}")]
    DuplicateId(String),

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HeapError {
    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        HeapError::InvalidKey {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HeapError::invalid_key("priority 150 outside [0, 100]");
        assert_eq!(err.to_string(), "invalid key: priority 150 outside [0, 100]");
        assert_eq!(HeapError::NotFound.to_string(), "entry not found");
        assert_eq!(
            HeapError::DuplicateId("Pedro".into()).to_string(),
            "duplicate entry: Pedro"
        );
        assert_eq!(
            HeapError::InvalidConfig("bad".into()).to_string(),
            "invalid configuration: bad"
        );
    }
}
