//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "product_catalog=info,tower_http=info";

/// Install the global fmt subscriber. Filter comes from `RUST_LOG`, else `DEFAULT_LOG_FILTER`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}
