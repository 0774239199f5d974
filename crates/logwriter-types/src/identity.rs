//! Logger identity
//!
//! The (subsystem, category) pair scopes and routes messages from a
//! Logger instance. Sinks may use it for routing and filtering but
//! never parse it.

use serde::{Deserialize, Serialize};

/// The (subsystem, category) pair identifying a Logger
///
/// `subsystem` is a reverse-DNS-style namespace (for example
/// `com.example.app`); `category` is a sub-grouping within the
/// subsystem and may be empty. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggerIdentity {
    subsystem: String,
    category: String,
}

impl LoggerIdentity {
    /// Create an identity from a subsystem and category
    ///
    /// No validation happens here; whether an empty subsystem is
    /// acceptable is decided at Logger construction.
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
        }
    }

    /// The reverse-DNS-style namespace
    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// The sub-grouping within the subsystem (may be empty)
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl std::fmt::Display for LoggerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.category.is_empty() {
            write!(f, "{}", self.subsystem)
        } else {
            write!(f, "{}[{}]", self.subsystem, self.category)
        }
    }
}
