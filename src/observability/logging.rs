//! Structured logging setup
//!
//! One subscriber per process. `RUST_LOG` overrides the configured filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http_server::{ServerError, ServerResult};

/// Build the filter: `RUST_LOG` if set and valid, else `default_filter`,
/// else `info`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. JSON lines when `json` is set.
pub fn init_logging(default_filter: &str, json: bool) -> ServerResult<()> {
    let filter = env_filter(default_filter);

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    result.map_err(|e| ServerError::Logging(e.to_string()))
}
