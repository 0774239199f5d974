//! Core types shared across the logwriter facade
//!
//! This crate provides the foundational value types used by the
//! `Logger` facade and by sink implementations:
//!
//! - **Severity**: the five fixed severity levels
//! - **LoggerIdentity**: the (subsystem, category) pair scoping a Logger
//! - **LogRecord**: one emitted message with identity, severity, timestamp
//! - **Schema constants**: canonical field keys for structured output

pub mod identity;
pub mod record;
pub mod schema;
pub mod severity;

pub use identity::LoggerIdentity;
pub use record::LogRecord;
pub use severity::Severity;
