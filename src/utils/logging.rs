//! Structured logging setup.
//!
//! Configures the `tracing` ecosystem for the plugin. The host runtime may
//! already install a global subscriber; in that case initialization here is
//! skipped rather than treated as a failure.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or the
/// provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    // A subscriber installed by the host runtime takes precedence.
    if result.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}
