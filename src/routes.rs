//! Application routing configuration with middleware stack.
//!
//! # Middleware Stack (applied in order)
//!
//! ```text
//! Request
//!    │
//!    ▼
//! ┌──────────────────┐
//! │     Logger       │ ← timestamped method/path, X-Request-Id
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │     Tracing      │ ← HTTP request/response spans
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │      CORS        │ ← Cross-origin headers
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Authentication  │ ← 401 if invalid (only under /api)
//! └────────┬─────────┘
//!          │
//!          ▼
//!      Handler  (create additionally runs field validation)
//! ```
//!
//! # Route Groups
//!
//! - `/`, `/health` - Greeting and health (no auth)
//! - `/api/products` - Product catalog (API key required)

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers;
use crate::middleware::{ApiKeyAuth, log_request};
use crate::state::AppState;

/// Build the application router with all routes and middleware configured.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let auth = ApiKeyAuth::new(config.api_key.clone());
    if auth.is_configured() {
        info!("API key authentication enabled for /api routes");
    } else {
        warn!("API_KEY is not set; every /api request will be rejected");
    }

    // The fallbacks sit inside the authenticated router so unknown /api
    // paths and methods are still gated by the key.
    let api = Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/search", get(handlers::search_products))
        .route("/products/stats", get(handlers::product_stats))
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .method_not_allowed_fallback(handlers::route_not_found)
        .fallback(handlers::route_not_found)
        .layer(auth);

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .method_not_allowed_fallback(handlers::route_not_found)
        .nest("/api", api)
        .fallback(handlers::route_not_found);

    // =========================================================================
    // Apply Middleware Stack (order matters - applied bottom to top)
    // =========================================================================

    // 1. Request body size limit
    router = router.layer(DefaultBodyLimit::max(config.max_request_body_size));

    // 2. CORS
    router = router.layer(build_cors_layer(&config.cors_allowed_origins));

    // 3. Tracing
    router = router.layer(TraceLayer::new_for_http());

    // 4. Request logger (outermost, sees every request first)
    router = router.layer(axum::middleware::from_fn(log_request));

    router.with_state(state)
}

/// Build CORS layer from configuration.
///
/// `*` anywhere in the list allows any origin; otherwise unparsable entries
/// are skipped.
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_any = allowed_origins.iter().any(|o| o == "*");

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allow_any {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
