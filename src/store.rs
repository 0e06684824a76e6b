//! Product storage.
//!
//! The catalog lives in an insertion-ordered `Vec<Product>` behind a
//! `tokio::sync::RwLock`. Reads share the lock; every mutation holds the
//! write lock for its whole lookup-then-modify sequence, so concurrent
//! requests never interleave their changes.
//!
//! Handlers only see the [`ProductRepository`] trait, which keeps the door
//! open for a persistent backend without touching the HTTP layer.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, ProductPatch};
use crate::validation::EMPTY_UPDATE_MESSAGE;

/// Message for lookups of an unknown product id.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Listing parameters after defaults have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// 1-based page number
    pub page: i64,
    /// Page size
    pub limit: i64,
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Number of products matching the filter
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub items: Vec<Product>,
}

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_products: usize,
    pub count_by_category: BTreeMap<String, usize>,
}

/// Storage operations used by the HTTP handlers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Filter by category and return the requested page.
    async fn list(&self, filter: &ProductFilter) -> AppResult<ProductPage>;

    /// Case-insensitive substring search on product names.
    async fn search(&self, term: &str) -> AppResult<Vec<Product>>;

    /// Totals per category.
    async fn stats(&self) -> AppResult<CatalogStats>;

    /// Fetch a product by exact id.
    async fn get(&self, id: &str) -> AppResult<Product>;

    /// Append a new product and return it.
    async fn create(&self, input: NewProduct) -> AppResult<Product>;

    /// Apply a partial update to an existing product.
    ///
    /// Fails with `NotFound` before checking whether the patch is empty.
    async fn update(&self, id: &str, patch: ProductPatch) -> AppResult<Product>;

    /// Remove a product and return it.
    async fn delete(&self, id: &str) -> AppResult<Product>;

    /// Number of stored products.
    async fn count(&self) -> usize;
}

/// Compute the slice of a `len`-long sequence covered by `page`/`limit`.
///
/// The window is `[(page - 1) * limit, (page - 1) * limit + limit)`. A
/// negative bound counts back from the end of the sequence, then both bounds
/// are clipped to `[0, len]`; an end before the start yields an empty window.
/// So `page=1&limit=-1` drops the last item and `page=-1&limit=1` selects the
/// second-to-last one.
pub fn page_window(len: usize, page: i64, limit: i64) -> Range<usize> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let start = page.saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit);

    let resolve = |bound: i64| {
        if bound < 0 {
            bound.saturating_add(len_i).max(0)
        } else {
            bound.min(len_i)
        }
    };
    let start = resolve(start);
    let end = resolve(end).max(start);

    let to_index = |v: i64| usize::try_from(v).unwrap_or(0);
    to_index(start)..to_index(end)
}

/// In-memory implementation of [`ProductRepository`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `products`, in order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Create a repository holding the demo catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, filter: &ProductFilter) -> AppResult<ProductPage> {
        let products = self.products.read().await;

        let filtered: Vec<&Product> = match filter.category.as_deref() {
            Some(category) => products.iter().filter(|p| p.in_category(category)).collect(),
            None => products.iter().collect(),
        };

        let window = page_window(filtered.len(), filter.page, filter.limit);
        let items = filtered
            .get(window)
            .unwrap_or_default()
            .iter()
            .map(|p| (*p).clone())
            .collect();

        Ok(ProductPage {
            total: filtered.len(),
            page: filter.page,
            limit: filter.limit,
            items,
        })
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.name_contains(term))
            .cloned()
            .collect())
    }

    async fn stats(&self) -> AppResult<CatalogStats> {
        let products = self.products.read().await;

        let mut count_by_category = BTreeMap::new();
        for product in products.iter() {
            *count_by_category
                .entry(product.category.clone())
                .or_insert(0) += 1;
        }

        Ok(CatalogStats {
            total_products: products.len(),
            count_by_category,
        })
    }

    async fn get(&self, id: &str) -> AppResult<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    async fn create(&self, input: NewProduct) -> AppResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.push(product.clone());

        debug!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> AppResult<Product> {
        let mut products = self.products.write().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        if patch.is_empty() {
            return Err(AppError::Validation(EMPTY_UPDATE_MESSAGE.to_string()));
        }

        patch.apply_to(product);

        debug!(product_id = %product.id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<Product> {
        let mut products = self.products.write().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        let removed = products.remove(index);

        debug!(product_id = %removed.id, "Deleted product");
        Ok(removed)
    }

    async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}

/// The demo catalog loaded at startup when `SEED_PRODUCTS` is enabled.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::with_id(
            "1",
            NewProduct {
                name: "Laptop".to_string(),
                description: "High-performance laptop with 16GB RAM".to_string(),
                price: Decimal::from(1200),
                category: "electronics".to_string(),
                in_stock: true,
            },
        ),
        Product::with_id(
            "2",
            NewProduct {
                name: "Smartphone".to_string(),
                description: "Latest model with 128GB storage".to_string(),
                price: Decimal::from(800),
                category: "electronics".to_string(),
                in_stock: true,
            },
        ),
        Product::with_id(
            "3",
            NewProduct {
                name: "Coffee Maker".to_string(),
                description: "Programmable coffee maker with timer".to_string(),
                price: Decimal::from(50),
                category: "kitchen".to_string(),
                in_stock: false,
            },
        ),
    ]
}
