// ============================================================================
// Logging Setup
// tracing-subscriber initialization for binaries, demos and tests
// ============================================================================

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directive (default `info`),
///   e.g. `RUST_LOG=fabrication_quote=debug` to see every module result
///
/// Does nothing if a subscriber is already installed.
///
/// # Example
/// ```no_run
/// fabrication_quote::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// Debug-level subscriber that writes through the test harness capture
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tolerates_existing_subscriber() {
        init_test();
        init();
        tracing::debug!(target: "fabrication_quote", "subscriber installed");
    }
}
