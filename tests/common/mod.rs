use tracing_subscriber::EnvFilter;

/// Routes engine logs to the test harness; `RUST_LOG=debug` shows moves.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
