use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr, honoring `RUST_LOG`.
///
/// Both binaries are short-lived; stderr is where the CLI user or the host
/// runtime already captures output, so no file appender is involved.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
