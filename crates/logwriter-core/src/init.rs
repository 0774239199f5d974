//! Subscriber initialization
//!
//! Processes that route records through [`TracingSink`] need a
//! tracing subscriber installed once at startup; this module provides
//! that single initialization point.
//!
//! [`TracingSink`]: crate::sink::TracingSink

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Subscriber profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Registry-only setup; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber stack
///
/// Call once at application startup. Repeated calls are no-ops.
///
/// # Profiles
///
/// - **Development**: human-readable logs, `logwriter=debug` default filter
/// - **Production**: JSON structured logs, `logwriter=info` default filter
/// - **Test**: bare registry for tests that layer their own capture
///
/// # Example
///
/// ```
/// use logwriter_core::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("logwriter=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("logwriter=info")),
                    )
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
