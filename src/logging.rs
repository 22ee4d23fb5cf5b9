use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default
/// `info`). Safe to call multiple times; later calls are no-ops.
pub fn init_default() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .compact()
        .try_init();
}
