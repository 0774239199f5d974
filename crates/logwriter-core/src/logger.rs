//! The Logger facade
//!
//! A Logger has exactly one state (constructed, immutable identity)
//! and one terminal action per call: build a record and hand it to
//! the sink.

use std::sync::Arc;

use logwriter_types::{LogRecord, LoggerIdentity, Severity};

use crate::errors::{LogWriterError, Result};
use crate::sink::Sink;

/// A named logging handle bound to one identity and one sink
///
/// Emission methods take `&self`, perform no internal synchronization,
/// and may be called from any number of threads concurrently; record
/// handling under concurrency is the sink's concern. Cloning shares
/// the sink handle.
#[derive(Clone)]
pub struct Logger {
    identity: LoggerIdentity,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger for the given subsystem and category
    ///
    /// `subsystem` is a reverse-DNS-style namespace and must be
    /// non-empty; `category` may be empty.
    ///
    /// # Errors
    ///
    /// Returns `LogWriterError::InvalidIdentity` when `subsystem` is
    /// empty. Never fails otherwise.
    pub fn new(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        sink: Arc<dyn Sink>,
    ) -> Result<Self> {
        Self::with_identity(LoggerIdentity::new(subsystem, category), sink)
    }

    /// Create a logger from an existing identity
    ///
    /// # Errors
    ///
    /// Returns `LogWriterError::InvalidIdentity` when the identity's
    /// subsystem is empty.
    pub fn with_identity(identity: LoggerIdentity, sink: Arc<dyn Sink>) -> Result<Self> {
        if identity.subsystem().is_empty() {
            return Err(LogWriterError::InvalidIdentity {
                reason: "subsystem must be non-empty".to_string(),
            });
        }
        Ok(Self { identity, sink })
    }

    /// The identity stamped onto every record
    pub fn identity(&self) -> &LoggerIdentity {
        &self.identity
    }

    /// Human-readable identity rendering, for debugging only
    ///
    /// The exact format is not stable across versions.
    pub fn describe(&self) -> String {
        self.identity.to_string()
    }

    /// Emit one record at the given severity
    ///
    /// Makes exactly one sink call per invocation, with no buffering
    /// or retry. A sink failure never reaches the caller; it is
    /// reported on the diagnostic channel and dropped.
    pub fn emit(&self, severity: Severity, message: impl Into<String>) {
        let record = LogRecord::now(self.identity.clone(), severity, message);
        if let Err(err) = self.sink.write(record) {
            tracing::debug!(
                subsystem = self.identity.subsystem(),
                category = self.identity.category(),
                err_code = err.code(),
                err = %err,
                "sink rejected record"
            );
        }
    }

    /// Emit at `Severity::Default`
    pub fn log_default(&self, message: impl Into<String>) {
        self.emit(Severity::Default, message);
    }

    /// Emit at `Severity::Info`
    pub fn log_info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message);
    }

    /// Emit at `Severity::Debug`
    pub fn log_debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message);
    }

    /// Emit at `Severity::Error`
    pub fn log_error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message);
    }

    /// Emit at `Severity::Fault`
    pub fn log_fault(&self, message: impl Into<String>) {
        self.emit(Severity::Fault, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
