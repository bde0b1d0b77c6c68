//! # Logging
//!
//! Tracing subscriber setup for processes embedding tippy-core.
//!
//! The library itself only emits `tracing` events (mostly `debug!`); nothing
//! is printed unless the host installs a subscriber, e.g. via
//! [`init_tracing`].
//!
//! Compiled only with the `logging` feature, which pulls in
//! `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,tippy_core=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tippy_core=trace` - Trace tippy-core only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the call does nothing.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing();
        assert!(!init_tracing());

        // Events flow through the installed subscriber without panicking
        let bill = crate::Bill::new(5.0).unwrap();
        assert!(bill.compute_rounded_tip(50.0).is_ok());
    }
}
