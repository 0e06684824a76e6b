//! Shared application state for Axum handlers.
//!
//! The state is cloned for every request; everything inside is behind an
//! `Arc`, so clones are cheap and all handlers observe the same catalog.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::store::{InMemoryProductRepository, ProductRepository};

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product storage
    pub products: Arc<dyn ProductRepository>,
    /// Application configuration
    pub config: Arc<Config>,
    /// Timestamp when the application started
    pub started_at: Instant,
}

impl AppState {
    /// Create state backed by the in-memory repository.
    ///
    /// The demo catalog is loaded when `config.seed_products` is set.
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_products {
            info!("Seeding product catalog with demo data");
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };

        Self::with_repository(Arc::new(repository), config)
    }

    /// Create state around an existing repository.
    pub fn with_repository(products: Arc<dyn ProductRepository>, config: Config) -> Self {
        Self {
            products,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Get the application uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
