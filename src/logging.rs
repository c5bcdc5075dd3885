use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global stderr subscriber. Call once near the start of `main`.
///
/// `RUST_LOG` takes precedence over `default_directive` (the `[log] level`
/// config value). An unparsable directive falls back to `info`.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
