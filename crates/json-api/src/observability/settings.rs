//! Process-global observability runtime settings.

use std::sync::{
    OnceLock,
    atomic::{AtomicU64, Ordering},
};

use tracing::warn;

use crate::config::ServerConfig;

const DEFAULT_SLOW_REQUEST_THRESHOLD_MS: u64 = 1_000;
const DEFAULT_PRICE_ROUTE: &str = "api/get-price";

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(DEFAULT_SLOW_REQUEST_THRESHOLD_MS);
static PRICE_ROUTE: OnceLock<String> = OnceLock::new();

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(
        config.observability.slow_request_threshold_ms,
        Ordering::Relaxed,
    );

    if PRICE_ROUTE.set(config.server.price_route.clone()).is_err() {
        warn!("price route already configured, keeping {}", price_route());
    }
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}

/// Path the price endpoint is mounted on.
pub(super) fn price_route() -> &'static str {
    PRICE_ROUTE.get().map_or(DEFAULT_PRICE_ROUTE, String::as_str)
}
