//! Product catalog endpoints under `/api/products`.
//!
//! Every handler returns [`AppResult`], so any failure goes straight to the
//! error envelope.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, instrument};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::metrics::{self, Mutation};
use crate::middleware::ValidProduct;
use crate::models::{
    DeleteProductResponse, ListProductsQuery, Product, ProductListResponse, SearchProductsQuery,
    SearchResponse, StatsResponse, UpdateProductRequest,
};
use crate::state::AppState;
use crate::store::ProductFilter;
use crate::validation::{normalize_update, validate_search_term};

/// Confirmation message returned on delete.
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

/// List products, optionally filtered by category, one page at a time.
///
/// # Query Parameters
///
/// - `category` - case-insensitive exact match (empty = no filter)
/// - `page` - 1-based page (default: 1)
/// - `limit` - page size (default: `DEFAULT_PAGE_LIMIT`)
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListProductsQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let filter = ProductFilter {
        category: query.category.filter(|c| !c.is_empty()),
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(state.config.default_page_limit),
    };

    let page = state.products.list(&filter).await?;

    Ok(Json(ProductListResponse {
        total: page.total,
        page: page.page,
        limit: page.limit,
        data: page.items,
    }))
}

/// Search product names by case-insensitive substring.
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchProductsQuery>,
) -> AppResult<Json<SearchResponse>> {
    let term = validate_search_term(query.name)?;
    let results = state.products.search(&term).await?;

    Ok(Json(SearchResponse {
        total_results: results.len(),
        results,
    }))
}

/// Catalog totals per category.
#[instrument(skip(state))]
pub async fn product_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.products.stats().await?;

    Ok(Json(StatsResponse {
        total_products: stats.total_products,
        count_by_category: stats.count_by_category,
    }))
}

/// Get a single product by id.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.products.get(&id).await?))
}

/// Create a product from a validated payload.
#[instrument(skip(state, product))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidProduct(product): ValidProduct,
) -> AppResult<(StatusCode, Json<Product>)> {
    let created = state.products.create(product).await?;

    info!(product_id = %created.id, "Product created");
    metrics::record_mutation(Mutation::Create, state.products.count().await);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a product.
///
/// Empty strings and a zero price in the body are ignored; `inStock` is
/// applied whenever present.
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let updated = state.products.update(&id, normalize_update(payload)).await?;

    info!(product_id = %updated.id, "Product updated");
    metrics::record_mutation(Mutation::Update, state.products.count().await);

    Ok(Json(updated))
}

/// Delete a product, returning it in a one-element list.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteProductResponse>> {
    let removed = state.products.delete(&id).await?;

    info!(product_id = %removed.id, "Product deleted");
    metrics::record_mutation(Mutation::Delete, state.products.count().await);

    Ok(Json(DeleteProductResponse {
        message: DELETED_MESSAGE.to_string(),
        deleted_product: vec![removed],
    }))
}
