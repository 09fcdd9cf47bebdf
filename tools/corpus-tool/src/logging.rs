use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs to stderr so that stdout stays free for command output. The level
/// comes from `RUST_LOG`, `info` when unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
