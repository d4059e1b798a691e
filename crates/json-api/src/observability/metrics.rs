//! Prometheus metrics for the pricing API.
//!
//! HTTP traffic is labelled by endpoint rather than raw path, and every price lookup is
//! counted by outcome so rejected and failed quotes can be told apart from priced ones.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const NAMESPACE: &str = "pricetag_json";

const DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// How a price lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteOutcome {
    /// A price was returned.
    Priced,

    /// The query was invalid or named something that does not exist.
    Rejected,

    /// The store could not answer.
    Failed,
}

impl QuoteOutcome {
    fn label(self) -> &'static str {
        match self {
            Self::Priced => "priced",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug)]
struct ApiMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    quotes_total: IntCounterVec,
}

static API_METRICS: OnceLock<Option<ApiMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static ApiMetrics> {
    API_METRICS
        .get_or_init(|| {
            ApiMetrics::build()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

fn registered<C>(registry: &Registry, collector: C) -> prometheus::Result<C>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

impl ApiMetrics {
    fn build() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests_total = registered(
            &registry,
            IntCounterVec::new(
                Opts::new("http_requests_total", "HTTP requests by endpoint and status class.")
                    .namespace(NAMESPACE),
                &["method", "endpoint", "status_class"],
            )?,
        )?;

        let request_duration_seconds = registered(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "http_request_duration_seconds",
                    "HTTP request duration in seconds by endpoint.",
                )
                .namespace(NAMESPACE)
                .buckets(DURATION_BUCKETS.to_vec()),
                &["endpoint"],
            )?,
        )?;

        let requests_in_flight = registered(
            &registry,
            IntGauge::with_opts(
                Opts::new("http_requests_in_flight", "HTTP requests being served.")
                    .namespace(NAMESPACE),
            )?,
        )?;

        let quotes_total = registered(
            &registry,
            IntCounterVec::new(
                Opts::new("quotes_total", "Price lookups by outcome.").namespace(NAMESPACE),
                &["outcome"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            quotes_total,
        })
    }
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard(Option<&'static IntGauge>);

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, endpoint: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .requests_total
        .with_label_values(&[method, endpoint, status_class(status)])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[endpoint])
        .observe(seconds);
}

/// Counts one price lookup.
pub(crate) fn record_quote(outcome: QuoteOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .quotes_total
            .with_label_values(&[outcome.label()])
            .inc();
    }
}

fn status_class(status: StatusCode) -> &'static str {
    if status.is_success() {
        "2xx"
    } else if status.is_client_error() {
        "4xx"
    } else if status.is_server_error() {
        "5xx"
    } else if status.is_redirection() {
        "3xx"
    } else {
        "1xx"
    }
}

fn encode() -> Result<(String, Vec<u8>), String> {
    let metrics = metrics().ok_or("metrics registry unavailable")?;
    let encoder = TextEncoder::new();

    let mut body = Vec::new();

    encoder
        .encode(&metrics.registry.gather(), &mut body)
        .map_err(|source| format!("failed to encode metrics: {source}"))?;

    Ok((encoder.format_type().to_owned(), body))
}

/// Prometheus text exposition. Only mounted when metrics are enabled.
#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let (content_type, body) = match encode() {
        Ok(encoded) => encoded,
        Err(message) => {
            error!("{message}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    if let Ok(value) = HeaderValue::from_str(&content_type) {
        res.headers_mut().insert(CONTENT_TYPE, value);
    }

    res.render(String::from_utf8_lossy(&body).into_owned());
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn statuses_are_grouped_by_class() {
        assert_eq!(status_class(StatusCode::OK), "2xx");
        assert_eq!(status_class(StatusCode::BAD_REQUEST), "4xx");
        assert_eq!(status_class(StatusCode::SERVICE_UNAVAILABLE), "5xx");
        assert_eq!(status_class(StatusCode::CONTINUE), "1xx");
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_endpoint_and_quote_metrics() -> TestResult {
        observe_request("GET", "price", StatusCode::OK, 0.042);
        observe_request("GET", "price", StatusCode::BAD_REQUEST, 0.003);
        record_quote(QuoteOutcome::Priced);
        record_quote(QuoteOutcome::Rejected);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        let price_requests = response.lines().any(|line| {
            line.starts_with("pricetag_json_http_requests_total")
                && line.contains(r#"endpoint="price""#)
        });

        assert!(price_requests, "expected endpoint-labelled request counter");
        assert!(
            response.contains("pricetag_json_http_request_duration_seconds_bucket"),
            "expected request duration histogram"
        );
        assert!(
            response.contains("pricetag_json_http_requests_in_flight"),
            "expected in-flight gauge"
        );
        assert!(
            response.contains(r#"pricetag_json_quotes_total{outcome="priced"}"#),
            "expected priced quotes"
        );
        assert!(
            response.contains(r#"pricetag_json_quotes_total{outcome="rejected"}"#),
            "expected rejected quotes"
        );

        Ok(())
    }
}
