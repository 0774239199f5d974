//! The sink boundary and bundled sink implementations
//!
//! A sink is the destination and policy owner for emitted records:
//! what to retain per severity, when to evict, where to store. The
//! Logger has zero awareness of any of that.

pub mod memory;
pub mod trace;

pub use memory::MemorySink;
pub use trace::{severity_level, TracingSink};

use logwriter_types::LogRecord;

use crate::errors::SinkError;

/// Destination for emitted log records
///
/// Implementations must be safe to call concurrently from multiple
/// threads and must not block indefinitely. Record retention and
/// eviction policy lives entirely in the sink.
pub trait Sink: Send + Sync {
    /// Accept one record; ownership transfers to the sink
    ///
    /// # Errors
    ///
    /// Returns a `SinkError` when the record cannot be accepted. The
    /// Logger swallows such errors; they exist for diagnostics and
    /// for other sink consumers.
    fn write(&self, record: LogRecord) -> Result<(), SinkError>;
}

/// Sink that discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _record: LogRecord) -> Result<(), SinkError> {
        Ok(())
    }
}
