//! Request-level logging, request IDs and metrics.

mod endpoints;
mod request_ids;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// What the hoop knows about a request once the handler chain has returned.
#[derive(Debug)]
struct CompletedRequest<'a> {
    request_id: &'a str,
    method: &'a str,
    path: &'a str,
    status: StatusCode,
    elapsed: Duration,
}

impl CompletedRequest<'_> {
    fn endpoint(&self) -> &'static str {
        endpoints::endpoint_label(self.path, self.status, settings::price_route())
    }

    fn is_slow(&self) -> bool {
        self.elapsed.as_millis() > u128::from(settings::slow_request_threshold_ms())
    }

    fn record(&self, span: &Span) {
        let endpoint = self.endpoint();
        let status = self.status.as_u16();
        let duration_ms = self.elapsed.as_millis();

        metrics::observe_request(self.method, endpoint, self.status, self.elapsed.as_secs_f64());

        span.record("endpoint", endpoint);
        span.record("status", status);
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status, duration_ms, "request.completed");

            if self.status.is_server_error() {
                error!(status, request_id = self.request_id, "server error response");
            } else if self.status.is_client_error() {
                warn!(status, request_id = self.request_id, "client error response");
            }

            if self.is_slow() {
                warn!(
                    endpoint,
                    duration_ms,
                    threshold_ms = settings::slow_request_threshold_ms(),
                    "slow request detected"
                );
            }
        });
    }
}

/// Tags every request with an `x-request-id`, wraps the handler chain in an
/// `http.request` span and records the outcome.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let _in_flight = metrics::InFlightRequestGuard::track();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %req.remote_addr(),
        endpoint = tracing::field::Empty,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    CompletedRequest {
        request_id: &request_id,
        method: &method,
        path: &path,
        status: request_ids::response_status_or_ok(res.status_code),
        elapsed: started.elapsed(),
    }
    .record(&span);
}
