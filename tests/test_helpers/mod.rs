//! Shared tracing setup for integration tests.

/// Installs a fmt subscriber honouring `RUST_LOG`, once per test binary.
///
/// Later calls are no-ops, so every test can call this without coordinating
/// with the others.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}
