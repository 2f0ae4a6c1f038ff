//! Observability: metrics counters and tracing setup.

pub mod metrics;

pub use metrics::Metrics;

use tracing_subscriber::EnvFilter;

/// Initialize a stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Safe to call
/// more than once (later calls are no-ops), so tests can share it.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
