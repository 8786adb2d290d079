//! Logging setup shared by the server and client binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the given default log level.
///
/// The default applies to the whole workspace; `RUST_LOG` overrides it.
///
/// # Arguments
///
/// * `default_level` - The default log level (e.g., "debug", "info", "warn")
pub fn setup_logger(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("logger initialized with default level '{}'", default_level);
}
