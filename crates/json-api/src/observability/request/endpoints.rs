//! Endpoint labels for request spans and metrics.

use salvo::http::StatusCode;

/// Requests that matched no route.
pub(super) const UNMATCHED: &str = "unmatched";

/// Names the endpoint a finished request was served by.
///
/// Labels form a closed set so arbitrary URLs cannot blow up metric cardinality. The
/// price endpoint is recognised on whatever path `PRICE_ROUTE` mounts it.
pub(super) fn endpoint_label(path: &str, status: StatusCode, price_route: &str) -> &'static str {
    if status == StatusCode::NOT_FOUND {
        return UNMATCHED;
    }

    let path = path.trim_matches('/');

    if path == price_route.trim_matches('/') {
        "price"
    } else if path == "healthcheck" {
        "healthcheck"
    } else if path == "docs" || path.starts_with("docs/") || path.starts_with("api-doc/") {
        "docs"
    } else {
        "other"
    }
}
