//! API key authentication middleware.
//!
//! Applied to the `/api` router only. Every request under it must carry the
//! configured secret in the `X-API-Key` header:
//!
//! ```bash
//! curl -H "X-API-Key: your-secret-key" http://localhost:3000/api/products
//! ```
//!
//! A missing header, a mismatching key, or a server without any configured
//! key all produce `401 UnauthorizedError` and the handler never runs.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::debug;

use crate::error::AppError;

/// Header name for API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message carried by every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid API key";

/// API key authentication layer.
///
/// When the expected key is `None`, no key can match and every request is
/// rejected.
#[derive(Clone)]
pub struct ApiKeyAuth {
    expected_key: Option<Arc<String>>,
}

impl ApiKeyAuth {
    /// Create a new API key auth layer.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            expected_key: api_key.map(Arc::new),
        }
    }

    /// Check whether a secret has been configured.
    pub fn is_configured(&self) -> bool {
        self.expected_key.is_some()
    }
}

impl<S> Layer<S> for ApiKeyAuth {
    type Service = ApiKeyAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyAuthService {
            inner,
            expected_key: self.expected_key.clone(),
        }
    }
}

/// API key authentication service wrapper.
#[derive(Clone)]
pub struct ApiKeyAuthService<S> {
    inner: S,
    expected_key: Option<Arc<String>>,
}

impl<S> Service<Request<Body>> for ApiKeyAuthService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let expected_key = self.expected_key.clone();
        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match authorize(&req, expected_key.as_deref().map(String::as_str)) {
                Ok(()) => {
                    debug!(path = %req.uri().path(), "API key accepted");
                    inner.call(req).await
                }
                Err(err) => Ok(err.into_response()),
            }
        })
    }
}

/// Decide whether `req` carries the expected key.
fn authorize<B>(req: &Request<B>, expected: Option<&str>) -> Result<(), AppError> {
    let provided = extract_api_key(req);

    match (provided, expected) {
        (Some(provided), Some(expected)) if constant_time_eq(provided, expected) => Ok(()),
        (None, _) => {
            debug!(path = %req.uri().path(), "Missing API key");
            Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
        }
        _ => {
            debug!(path = %req.uri().path(), "Invalid API key provided");
            Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
        }
    }
}

/// Read the API key header. Non-UTF-8 values count as absent.
fn extract_api_key<B>(req: &Request<B>) -> Option<&str> {
    req.headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Compare two strings in constant time.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
