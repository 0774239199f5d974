//! Severity levels for emitted log records
//!
//! Variants are declared in ascending filtering importance
//! (debug < info < default < error < fault). The ordering is advisory
//! for sink retention policy; the Logger itself never filters on it.

use serde::{Deserialize, Serialize};

/// Severity of a log record, from least to most operationally important
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Development-time detail; sinks typically hold it in memory only
    Debug,
    /// Helpful but non-essential troubleshooting information
    Info,
    /// Things that might result in a failure; the baseline level
    Default,
    /// Process-level errors; sinks typically persist these
    Error,
    /// System-level or multi-process errors; sinks typically persist these
    Fault,
}

impl Severity {
    /// Every severity, in ascending filtering importance
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Default,
        Severity::Error,
        Severity::Fault,
    ];

    /// Stable lowercase name for structured output
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Default => "default",
            Severity::Error => "error",
            Severity::Fault => "fault",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
