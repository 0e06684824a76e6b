//! # Products API
//!
//! A small REST service exposing a products catalog held in memory, built
//! with Axum:
//!
//! - **Catalog**: list with category filter and pagination, search, stats,
//!   get, create, partial update, delete
//! - **Security**: shared-secret API key on every `/api/*` route
//! - **Errors**: one JSON envelope for every failure
//! - **Observability**: request IDs, structured logging, Prometheus metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum HTTP Server                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Middleware (Logger → Trace → CORS → Auth)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Handlers (products, health)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductRepository (in-memory, RwLock-guarded Vec)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use products_api::{AppState, Config, build_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let addr = config.server_addr();
//!     let app = build_router(AppState::new(config));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Security Configuration
//!
//! ```bash
//! API_KEY=your-secret-key cargo run
//! curl -H "X-API-Key: your-secret-key" http://localhost:3000/api/products
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::build_router;
pub use state::AppState;
pub use store::{InMemoryProductRepository, ProductRepository};
