//! Tracing subscriber bootstrap
//!
//! Library crates only emit events through `tracing`; whoever owns the process
//! decides where they go by calling [`init_tracing`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, otherwise from `log_level`,
/// falling back to `info` when neither parses.
///
/// # Returns
///
/// `true` if this call installed the subscriber, `false` if one was already set
pub fn init_tracing(log_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
