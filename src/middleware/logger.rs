//! Request logging middleware.
//!
//! Runs first for every request. It never rejects anything: it records a
//! timestamped line with the method and path, tags the request with an
//! `X-Request-Id` (the client's own, or a fresh UUIDv4), and logs the status
//! and latency once the response is ready.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::metrics;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log the request and propagate its request ID.
///
/// Use with [`axum::middleware::from_fn`].
pub async fn log_request(mut req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = extract_or_generate_request_id(&req);
    let header_value = HeaderValue::from_str(&request_id)
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
    req.headers_mut()
        .insert(REQUEST_ID_HEADER, header_value.clone());

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!("request", request_id = %request_id, method = %method, path = %path);

    async move {
        info!(
            timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "{method} {path}"
        );

        let mut response = next.run(req).await;

        let status = response.status();
        let elapsed = started.elapsed();
        info!(
            status = status.as_u16(),
            latency_ms = elapsed.as_millis() as u64,
            "Request completed"
        );
        metrics::record_request(method.as_str(), status.as_u16(), elapsed.as_secs_f64());

        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
        response
    }
    .instrument(span)
    .await
}

/// Extract request ID from headers or generate a new one.
fn extract_or_generate_request_id(req: &Request) -> String {
    if let Some(header_value) = req.headers().get(REQUEST_ID_HEADER)
        && let Ok(value) = header_value.to_str()
        && !value.is_empty()
    {
        return value.to_string();
    }

    Uuid::new_v4().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route(
                "/fail",
                get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .layer(axum::middleware::from_fn(log_request))
    }

    #[test]
    fn test_extract_existing_request_id() {
        let req = Request::builder()
            .header("x-request-id", "existing-id-123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_or_generate_request_id(&req), "existing-id-123");
    }

    #[test]
    fn test_generate_new_request_id() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let id = extract_or_generate_request_id(&req);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc");
    }

    #[tokio::test]
    async fn test_logger_passes_status_through() {
        let response = app()
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
