//! Thread-safe alert system with a bounded 0–100 severity scale.

use crate::error::HeapError;
use crate::heap::{BoundedRange, PriorityHeap};
use crate::sync::SyncHeap;

/// Lowest accepted severity.
pub const MIN_SEVERITY: f64 = 0.0;
/// Highest accepted severity.
pub const MAX_SEVERITY: f64 = 100.0;

/// Alert queue: highest severity first, earlier alert wins ties.
///
/// All methods take `&self`; share it with `Arc` across monitor threads.
#[derive(Debug)]
pub struct AlertSystem {
    heap: SyncHeap<f64, String>,
}

impl Default for AlertSystem {
    fn default() -> Self {
        let heap = PriorityHeap::max_with_policy(BoundedRange::new(MIN_SEVERITY, MAX_SEVERITY));
        Self {
            heap: SyncHeap::new(heap),
        }
    }
}

impl AlertSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an alert.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidKey`] for NaN or a severity outside 0–100.
    pub fn insert_alert(&self, severity: f64, symbol: impl Into<String>) -> Result<(), HeapError> {
        self.heap.insert(severity, symbol.into()).map(|_| ())
    }

    /// `(severity, symbol)` of the most critical alert.
    pub fn highest_alert(&self) -> Option<(f64, String)> {
        self.heap.peek().map(|e| e.into_parts())
    }

    pub fn extract_alert(&self) -> Option<(f64, String)> {
        self.heap.extract().map(|e| e.into_parts())
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
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_highest_after_each_insert() {
        let alerts = AlertSystem::new();
        alerts.insert_alert(4.0, "ALFA").unwrap();
        assert_eq!(alerts.highest_alert(), Some((4.0, "ALFA".into())));
        alerts.insert_alert(2.0, "TUL").unwrap();
        assert_eq!(alerts.highest_alert(), Some((4.0, "ALFA".into())));
        alerts.insert_alert(5.0, "GOLF").unwrap();
        assert_eq!(alerts.highest_alert(), Some((5.0, "GOLF".into())));
        alerts.insert_alert(3.0, "OSCAR").unwrap();

        let order: Vec<String> = std::iter::from_fn(|| alerts.extract_alert())
            .map(|(_, s)| s)
            .collect();
        assert_eq!(order, vec!["GOLF", "ALFA", "OSCAR", "TUL"]);
        assert!(alerts.highest_alert().is_none());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let alerts = AlertSystem::new();
        assert!(matches!(
            alerts.insert_alert(150.0, "X"),
            Err(HeapError::InvalidKey { .. })
        ));
        assert!(alerts.insert_alert(-1.0, "Y").is_err());
        assert!(alerts.insert_alert(f64::NAN, "Z").is_err());
        assert_eq!(alerts.len(), 0);
        alerts.insert_alert(-0.0, "NEGZERO").unwrap();
        alerts.insert_alert(MAX_SEVERITY, "EDGE").unwrap();
        alerts.insert_alert(MIN_SEVERITY, "FLOOR").unwrap();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts.extract_alert().map(|a| a.1), Some("EDGE".into()));
    }

    #[test]
    fn test_equal_severity_fifo() {
        let alerts = AlertSystem::new();
        alerts.insert_alert(50.0, "older").unwrap();
        alerts.insert_alert(50.0, "newer").unwrap();
        assert_eq!(alerts.extract_alert().map(|a| a.1), Some("older".into()));
    }

    #[test]
    fn test_shared_between_threads() {
        let alerts = Arc::new(AlertSystem::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let alerts = Arc::clone(&alerts);
                thread::spawn(move || {
                    for i in 0..20 {
                        let severity = (t * 20 + i) as f64;
                        let result = alerts.insert_alert(severity, format!("A{t}-{i}"));
                        if severity <= MAX_SEVERITY {
                            assert!(result.is_ok(), "severity {severity} rejected");
                        } else {
                            assert!(
                                matches!(result, Err(HeapError::InvalidKey { .. })),
                                "severity {severity} accepted"
                            );
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // severities 0..=159; only 0..=100 accepted
        assert_eq!(alerts.len(), 101);
        assert_eq!(alerts.highest_alert().map(|a| a.0), Some(100.0));
    }
}
