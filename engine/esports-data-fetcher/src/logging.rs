//! Logging setup for the fetcher binaries

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`)
pub fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}
