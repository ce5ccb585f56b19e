//! Diagnostic logging to stderr.
//!
//! stdout carries only JSON results, so every log line goes to stderr. The
//! filter comes from `RUST_LOG` and defaults to `warn`; `--verbose` raises
//! the default to `debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
