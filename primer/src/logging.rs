//! Tracing setup for applications embedding the library.
//!
//! Core components emit `debug`/`trace` events (reallocations, overwritten
//! and deleted records, rejected divisions). Nothing is printed unless a
//! subscriber is installed.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=primer=debug cargo test
/// ```
///
/// Panics if a global subscriber is already set; see [`try_init`].
pub fn init() {
    if let Err(err) = try_init() {
        panic!("{:#}", err);
    }
}

/// Like [`init`], but reports an already-installed subscriber as an error.
pub fn try_init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {}", err))
}
