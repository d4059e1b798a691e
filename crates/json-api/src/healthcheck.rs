//! Liveness check

use salvo::{oapi::ToSchema, prelude::*};
use serde::Serialize;

/// Body of `GET /healthcheck`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    status: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}

/// Reports that the process is serving. The catalog store is not consulted, so a slow
/// database never fails the check.
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn healthcheck_body_is_exactly_ok() -> TestResult {
        let service = Service::new(Router::with_path("healthcheck").get(handler));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_json::<Value>().await?, json!({"status": "ok"}));

        Ok(())
    }
}
