//! Logging setup
//!
//! Structured logging via `tracing` with an `EnvFilter`. `RUST_LOG` takes
//! precedence over the configured level when set.

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// JSON lines (structured logging).
    Json,
}

/// Initialize the global subscriber with the given level and format.
pub fn init(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            Registry::default()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
