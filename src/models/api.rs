use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Raw body of `POST /api/products`.
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported by the field validator rather than as a decoding error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Raw body of `PUT /api/products/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Query string of `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Case-insensitive category filter (empty = no filter)
    pub category: Option<String>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Page size (default: configured `DEFAULT_PAGE_LIMIT`)
    pub limit: Option<i64>,
}

/// Query string of `GET /api/products/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchProductsQuery {
    pub name: Option<String>,
}

/// Paginated listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    /// Number of products matching the filter (before pagination)
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub data: Vec<Product>,
}

/// Search results.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_results: usize,
    pub results: Vec<Product>,
}

/// Catalog statistics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_products: usize,
    /// Product count keyed by category exactly as stored
    pub count_by_category: BTreeMap<String, usize>,
}

/// Confirmation returned by `DELETE /api/products/{id}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub message: String,
    pub deleted_product: Vec<Product>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub product_count: usize,
    pub uptime_seconds: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_camel_case_in_stock() {
        let json = r#"{"name":"Pen","description":"Blue ink","price":2,"category":"office","inStock":false}"#;
        let request: CreateProductRequest =
            serde_json::from_str(json).expect("Deserialization should succeed");

        assert_eq!(request.price, Some(Decimal::from(2)));
        assert_eq!(request.in_stock, Some(false));
    }

    #[test]
    fn test_create_request_missing_fields_are_none() {
        let request: CreateProductRequest =
            serde_json::from_str("{}").expect("Deserialization should succeed");

        assert!(request.name.is_none());
        assert!(request.price.is_none());
        assert!(request.in_stock.is_none());
    }

    #[test]
    fn test_update_request_null_price_is_none() {
        let request: UpdateProductRequest =
            serde_json::from_str(r#"{"price":null}"#).expect("Deserialization should succeed");
        assert!(request.price.is_none());
    }

    #[test]
    fn test_stats_response_serialization() {
        let mut counts = BTreeMap::new();
        counts.insert("kitchen".to_string(), 1);
        counts.insert("electronics".to_string(), 2);

        let response = StatsResponse {
            total_products: 3,
            count_by_category: counts,
        };

        let json = serde_json::to_string(&response).expect("Serialization should succeed");
        assert_eq!(
            json,
            r#"{"totalProducts":3,"countByCategory":{"electronics":2,"kitchen":1}}"#
        );
    }

    #[test]
    fn test_delete_response_field_names() {
        let response = DeleteProductResponse {
            message: "Product deleted successfully".to_string(),
            deleted_product: vec![],
        };

        let json = serde_json::to_string(&response).expect("Serialization should succeed");
        assert!(json.contains("\"deletedProduct\":[]"));
    }
}
