//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Respect RUST_LOG when set; fall back to the configured filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Filter precedence: RUST_LOG env var, then config, then crate default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `fallback_filter` is used when RUST_LOG is not set (typically the
/// `observability.log_filter` config value).
pub fn init(fallback_filter: &str) {
    let fallback = fallback_filter.to_string();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
