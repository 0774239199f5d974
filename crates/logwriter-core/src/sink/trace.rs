//! Sink that forwards records to the `tracing` ecosystem
//!
//! The subscriber stack installed in the host process owns retention
//! and filtering, the same way the facade treats every other sink.

use tracing::Level;

use logwriter_types::{LogRecord, Severity};

use crate::errors::SinkError;
use crate::sink::Sink;

/// Map a facade severity onto a `tracing` level
///
/// `Default` and `Fault` have no direct tracing counterpart; they land
/// on INFO and ERROR respectively and stay distinguishable through the
/// `severity` field on the forwarded event.
pub fn severity_level(severity: Severity) -> Level {
    match severity {
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Default => Level::INFO,
        Severity::Error => Level::ERROR,
        Severity::Fault => Level::ERROR,
    }
}

/// Sink that emits one tracing event per record
///
/// Field names follow `logwriter_types::schema` so downstream layers
/// can filter on them consistently.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn write(&self, record: LogRecord) -> Result<(), SinkError> {
        let timestamp = record.timestamp.to_rfc3339();
        // The event! level argument must be const, so dispatch per level.
        match severity_level(record.severity) {
            Level::DEBUG => tracing::debug!(
                subsystem = record.identity.subsystem(),
                category = record.identity.category(),
                severity = record.severity.as_str(),
                timestamp = %timestamp,
                message = %record.message,
            ),
            Level::ERROR => tracing::error!(
                subsystem = record.identity.subsystem(),
                category = record.identity.category(),
                severity = record.severity.as_str(),
                timestamp = %timestamp,
                message = %record.message,
            ),
            _ => tracing::info!(
                subsystem = record.identity.subsystem(),
                category = record.identity.category(),
                severity = record.severity.as_str(),
                timestamp = %timestamp,
                message = %record.message,
            ),
        }
        Ok(())
    }
}
