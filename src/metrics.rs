//! Prometheus metrics for application observability.
//!
//! Metrics are exposed on a dedicated listener when `METRICS_PORT` is set.
//! Without an installed exporter, recording is a no-op.
//!
//! # Available Metrics
//!
//! ## Counters
//! - `products_http_requests_total` - Requests served (labels: method, status)
//! - `products_mutations_total` - Catalog changes (label: operation)
//!
//! ## Histograms
//! - `products_http_request_duration_seconds` - Request latency (label: method)
//!
//! ## Gauges
//! - `products_catalog_size` - Products currently stored

use std::net::SocketAddr;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Metric names as constants for consistency.
pub mod names {
    pub const HTTP_REQUESTS_TOTAL: &str = "products_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "products_http_request_duration_seconds";
    pub const MUTATIONS_TOTAL: &str = "products_mutations_total";
    pub const CATALOG_SIZE: &str = "products_catalog_size";
}

/// Kind of catalog change, used as the `operation` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn as_str(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

/// Install the Prometheus exporter and describe all metrics.
///
/// # Errors
///
/// Returns `AppError::Config` if the exporter cannot be installed (for
/// example, when the port is already bound).
pub fn init_metrics(metrics_addr: SocketAddr) -> AppResult<()> {
    PrometheusBuilder::new()
        .with_http_listener(metrics_addr)
        .install()
        .map_err(|e| AppError::Config(format!("Failed to install Prometheus exporter: {e}")))?;

    describe_counter!(names::HTTP_REQUESTS_TOTAL, "Total number of HTTP requests served");
    describe_counter!(
        names::MUTATIONS_TOTAL,
        "Total number of catalog create/update/delete operations"
    );
    describe_histogram!(
        names::HTTP_REQUEST_DURATION_SECONDS,
        "HTTP request duration in seconds"
    );
    describe_gauge!(names::CATALOG_SIZE, "Number of products currently stored");

    info!(addr = %metrics_addr, "Prometheus metrics endpoint started");
    Ok(())
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, status: u16, duration_secs: f64) {
    counter!(
        names::HTTP_REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, "method" => method.to_string())
        .record(duration_secs);
}

/// Record a successful catalog mutation and the resulting catalog size.
pub fn record_mutation(mutation: Mutation, catalog_size: usize) {
    counter!(names::MUTATIONS_TOTAL, "operation" => mutation.as_str()).increment(1);
    gauge!(names::CATALOG_SIZE).set(catalog_size as f64);
}
