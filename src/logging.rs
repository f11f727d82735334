//! Diagnostic tracing for the binary. Output goes to stderr so results on
//! stdout stay machine readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `filter`.
///
/// An unparsable directive falls back to `warn`. Calling this twice is a
/// no-op.
///
/// ```bash
/// LOOPTASKS_LOG=looptasks=debug looptasks shuffle 012345 1000000
/// ```
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
