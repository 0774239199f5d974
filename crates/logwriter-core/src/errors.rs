use thiserror::Error;

/// Result type alias using LogWriterError
pub type Result<T> = std::result::Result<T, LogWriterError>;

/// Errors surfaced to callers of the facade
///
/// Construction is the only fallible surface. Emission methods never
/// return an error; sink failures are handled inside the Logger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogWriterError {
    /// Logger identity rejected at construction
    #[error("Invalid logger identity: {reason}")]
    InvalidIdentity { reason: String },
}

impl LogWriterError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            LogWriterError::InvalidIdentity { .. } => "ERR_INVALID_IDENTITY",
        }
    }
}

/// Errors a sink may return from `write`
///
/// These never propagate past the Logger. They exist so sinks can
/// describe a failure for the diagnostic channel and so tests can
/// inject deliberate failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    /// Sink cannot accept records right now
    #[error("Sink unavailable: {reason}")]
    Unavailable { reason: String },

    /// Sink storage quota exceeded
    #[error("Sink storage quota exceeded")]
    StorageFull,

    /// Sink accepted the call but failed to store the record
    #[error("Sink write failed: {message}")]
    Write { message: String },
}

impl SinkError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            SinkError::Unavailable { .. } => "ERR_SINK_UNAVAILABLE",
            SinkError::StorageFull => "ERR_SINK_STORAGE_FULL",
            SinkError::Write { .. } => "ERR_SINK_WRITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identity_code() {
        let err = LogWriterError::InvalidIdentity {
            reason: "subsystem must be non-empty".to_string(),
        };
        assert_eq!(err.code(), "ERR_INVALID_IDENTITY");
    }

    #[test]
    fn test_sink_error_codes() {
        let cases = [
            (
                SinkError::Unavailable {
                    reason: "socket closed".to_string(),
                },
                "ERR_SINK_UNAVAILABLE",
            ),
            (SinkError::StorageFull, "ERR_SINK_STORAGE_FULL"),
            (
                SinkError::Write {
                    message: "short write".to_string(),
                },
                "ERR_SINK_WRITE",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_display_includes_reason() {
        let err = LogWriterError::InvalidIdentity {
            reason: "subsystem must be non-empty".to_string(),
        };
        assert!(err.to_string().contains("subsystem must be non-empty"));
    }
}
