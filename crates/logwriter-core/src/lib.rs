//! Structured logging facade
//!
//! A [`Logger`] binds an immutable (subsystem, category) identity and
//! forwards each message, together with its severity and a timestamp,
//! to an injected [`Sink`]. Buffering, retention, and eviction are
//! sink policy; the Logger is a pass-through with exactly one sink
//! call per emission.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use logwriter_core::{Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new("com.example.app", "network", Arc::new(sink.clone()))
//!     .expect("non-empty subsystem");
//!
//! logger.log_error("connection lost");
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! Construction is the only fallible operation. Emission methods
//! never fail from the caller's point of view; a sink error is
//! reported on a diagnostic channel and swallowed.

pub mod errors;
pub mod init;
pub mod logger;
pub mod sink;

pub use errors::{LogWriterError, Result, SinkError};
pub use init::{init, Profile};
pub use logger::Logger;
pub use sink::{MemorySink, NullSink, Sink, TracingSink};
