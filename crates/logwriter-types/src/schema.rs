//! Canonical schema constants for structured output
//!
//! These constants keep field naming consistent between the bundled
//! sinks and any external sink implementation.

// Canonical field keys for forwarded records
pub const FIELD_SUBSYSTEM: &str = "subsystem";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_TIMESTAMP: &str = "timestamp";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_distinct() {
        let mut keys = [
            FIELD_SUBSYSTEM,
            FIELD_CATEGORY,
            FIELD_SEVERITY,
            FIELD_MESSAGE,
            FIELD_TIMESTAMP,
        ];
        keys.sort_unstable();
        let mut deduped = keys.to_vec();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }
}
