//! Log records
//!
//! A record is built once per emission and handed to the sink whole.
//! The Logger never retains it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::LoggerIdentity;
use crate::severity::Severity;

/// One emitted log message, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub identity: LoggerIdentity,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Build a record stamped with the current time
    pub fn now(identity: LoggerIdentity, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            identity,
            severity,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
