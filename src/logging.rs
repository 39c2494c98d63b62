//! Tracing subscriber setup for the `genid` binary.
//!
//! Log output goes to stderr so stdout carries nothing but ids.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `warn`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = tracing_subscriber::fmt::format().with_ansi(false).without_time();

    let layer = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    if Registry::default().with(layer).try_init().is_ok() {
        tracing::debug!("tracing initialized");
    }
}
