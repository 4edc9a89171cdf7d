//! Log output for the command line tools.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// The filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a global subscriber that writes log events to stderr.
///
/// Stdout is left for the tools' machine-readable output. The level is read
/// from `RUST_LOG` and falls back to [DEFAULT_LOG_FILTER].
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_log = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}
