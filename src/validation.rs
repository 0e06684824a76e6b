//! Input validation for product payloads.
//!
//! Presence follows the catalog's "truthy" rules: a string counts as present
//! only when non-empty and a price only when non-zero. `inStock` is the
//! exception and counts whenever it is supplied, so `false` is honoured.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::models::{CreateProductRequest, NewProduct, ProductPatch, UpdateProductRequest};

/// Message returned when a create payload lacks a required field.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please provide all required fields: name, description, price, category";

/// Message returned when an update payload carries nothing to apply.
pub const EMPTY_UPDATE_MESSAGE: &str = "At least one field must be provided for update";

/// Message returned when search is called without a term.
pub const MISSING_SEARCH_TERM_MESSAGE: &str = "Please provide a search term (name)";

fn present_str(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn present_price(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|p| !p.is_zero())
}

/// Validate a create payload.
///
/// `name`, `description`, `price` and `category` must all be present; the
/// error deliberately names all four rather than the one that is missing.
/// `inStock` defaults to `true` when absent or null.
pub fn validate_new_product(request: CreateProductRequest) -> AppResult<NewProduct> {
    let (Some(name), Some(description), Some(price), Some(category)) = (
        present_str(request.name),
        present_str(request.description),
        present_price(request.price),
        present_str(request.category),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    Ok(NewProduct {
        name,
        description,
        price,
        category,
        in_stock: request.in_stock.unwrap_or(true),
    })
}

/// Reduce an update payload to the fields that will actually be applied.
///
/// Empty strings and a zero price are dropped silently. Whether the result
/// is empty is checked by the store once the target product is known to
/// exist.
pub fn normalize_update(request: UpdateProductRequest) -> ProductPatch {
    ProductPatch {
        name: present_str(request.name),
        description: present_str(request.description),
        price: present_price(request.price),
        category: present_str(request.category),
        in_stock: request.in_stock,
    }
}

/// Validate the search term, returning it when usable.
pub fn validate_search_term(term: Option<String>) -> AppResult<String> {
    present_str(term).ok_or_else(|| AppError::Validation(MISSING_SEARCH_TERM_MESSAGE.to_string()))
}
