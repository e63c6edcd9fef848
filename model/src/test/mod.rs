//! Cross-module tests for the performance model.

pub mod property;
pub mod unit;

/// Route `tracing` output of a test through the test harness.
///
/// Filtered by `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
