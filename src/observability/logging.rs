//! Structured logging.
//!
//! # Responsibilities
//! - One-line subscriber setup for host processes and tests
//! - Log level configurable via `RUST_LOG` with a sensible fallback
//!
//! # Design Decisions
//! - The core only emits through `tracing` macros; installing a subscriber is
//!   the host's choice, this helper just makes it easy

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a tracing subscriber with an env-filter.
///
/// `default_filter` is used when `RUST_LOG` is unset, e.g. `"olwsx_core=debug"`.
/// Calling this twice panics (subscribers install once per process); embedders
/// with their own subscriber should skip it entirely.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
