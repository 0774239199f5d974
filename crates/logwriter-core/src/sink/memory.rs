//! In-memory capture sink for deterministic assertions
//!
//! This sink retains every record it receives, in arrival order, for
//! inspection in tests and diagnostics.

use std::sync::{Arc, Mutex};

use logwriter_types::{LogRecord, Severity};

use crate::errors::SinkError;
use crate::sink::Sink;

/// Thread-safe sink that retains every record in memory
///
/// Cloning yields a handle onto the same buffer, so a test can keep
/// one handle for assertions while the Logger owns another.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured records in arrival order
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&LogRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }

    /// Assert that a record exists with the given severity and message
    ///
    /// # Panics
    ///
    /// Panics if no such record was captured
    pub fn assert_record_exists(&self, severity: Severity, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.severity == severity && r.message == message);
        assert!(
            found,
            "Expected record severity={} message={:?} not found in {} captured records",
            severity,
            message,
            records.len()
        );
    }
}

impl Sink for MemorySink {
    fn write(&self, record: LogRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .map(|mut records| records.push(record))
            .ok();
        Ok(())
    }
}
