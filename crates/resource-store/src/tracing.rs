//! # Tracing Setup
//!
//! Structured logging for services built on the store. The store actor emits events
//! with an `entity_type` field on every operation (`Created`, `Updated`, `Removed`,
//! `Not found`, ...), so filtering by entity kind works out of the box.
//!
//! ```bash
//! RUST_LOG=info cargo run                       # Lifecycle events only
//! RUST_LOG=debug cargo run                      # Full payloads
//! RUST_LOG=resource_store=debug,info cargo run  # Store internals only
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set and valid; otherwise `default_directive`
/// (e.g. `"info"`) is used.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
