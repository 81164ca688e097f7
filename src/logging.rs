//! Logging utilities for the ekman crate.
//!
//! Classification and override activity is reported through `tracing`
//! events; this module provides a convenience initializer for applications
//! (and tests) that do not install their own subscriber.

/// Initialize the tracing subscriber with the given log level.
///
/// An explicit `RUST_LOG` takes precedence over `log_level`. Safe to call
/// more than once: if a subscriber is already installed, the call is a
/// no-op, so libraries and test harnesses may both use it freely.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
