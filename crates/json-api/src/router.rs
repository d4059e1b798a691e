//! App Router

use salvo::Router;

use crate::{healthcheck, prices};

/// Routes served by the API, with the price lookup mounted at `price_route`.
pub(crate) fn app_router(price_route: &str) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path(price_route.trim_matches('/')).get(prices::get::handler))
}
