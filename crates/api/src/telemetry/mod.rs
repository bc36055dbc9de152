//! Telemetry initialisation for the demo service.
//!
//! Lightweight setup: structured JSON logs to stdout, plus the per-request
//! spans emitted by the router's `TraceLayer`. Nothing is exported anywhere.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// Outputs structured JSON logs at the configured level; `RUST_LOG` takes
/// precedence when set.
///
/// # Errors
///
/// Returns an error if a subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
