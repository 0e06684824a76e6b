//! Unauthenticated endpoints: greeting, health check and the 404 fallback.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use tracing::instrument;

use crate::error::{AppError, AppResult};
use crate::models::HealthResponse;
use crate::state::AppState;

/// Root greeting.
pub async fn root() -> &'static str {
    "Hello World!"
}

/// Health check endpoint.
///
/// # Response Body
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2024-01-15T10:30:00Z",
///   "productCount": 3,
///   "uptimeSeconds": 3600
/// }
/// ```
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        product_count: state.products.count().await,
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> AppResult<()> {
    Err(AppError::NotFound("Route not found".to_string()))
}
