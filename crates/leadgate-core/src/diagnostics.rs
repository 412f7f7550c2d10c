//! Bounded in-memory failure log
//!
//! An explicit, injectable collector rather than a process-wide singleton:
//! whoever wires up clients and controllers hands them a shared handle, and
//! tests can assert on captured entries without cross-test leakage. Entries
//! are never persisted or transmitted.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of entries retained.
pub const DEFAULT_CAPACITY: usize = 100;

/// One captured failure.
#[derive(Clone, Debug)]
pub struct DiagnosticEntry {
    /// When the failure was recorded.
    pub timestamp: DateTime<Utc>,
    /// The normalized failure.
    pub error: ApiError,
    /// Where it happened, e.g. `"contact.submit"`.
    pub context: String,
}

/// Shared, bounded log of recent failures. Cloning shares the buffer.
#[derive(Clone, Debug)]
pub struct DiagnosticLog {
    inner: Arc<RwLock<VecDeque<DiagnosticEntry>>>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog {
    /// Log retaining the most recent [`DEFAULT_CAPACITY`] failures.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Log retaining the most recent `capacity` failures.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Record a failure, evicting the oldest entry when full.
    pub fn record(&self, context: impl Into<String>, error: ApiError) {
        let context = context.into();
        tracing::warn!(context = %context, kind = ?error.kind, message = %error.message, "submission failure");
        let mut log = self.inner.write();
        if log.len() == self.capacity {
            log.pop_front();
        }
        log.push_back(DiagnosticEntry {
            timestamp: Utc::now(),
            error,
            context,
        });
    }

    /// Snapshot of retained entries, oldest first.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.inner.read().iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let log = DiagnosticLog::new();
        log.record("contact.submit", ApiError::network());
        log.record("support.submit", ApiError::from_status(500, None));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].context, "contact.submit");
        assert_eq!(entries[1].error.status, Some(500));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let log = DiagnosticLog::with_capacity(3);
        for status in [400, 401, 403, 404] {
            log.record("test", ApiError::from_status(status, None));
        }
        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].error.status, Some(401));
        assert_eq!(entries[2].error.status, Some(404));
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let log = DiagnosticLog::new();
        let handle = log.clone();
        handle.record("shared", ApiError::network());
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(handle.is_empty());
    }
}
