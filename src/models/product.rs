use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry.
///
/// `id` is assigned by the server on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category label; matched case-insensitively by list and search
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Build a new product with a freshly generated id.
    pub fn new(input: NewProduct) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Build a product with a caller-chosen id (used for seed data).
    pub fn with_id(id: impl Into<String>, input: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Case-insensitive exact category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

/// Normalized partial update.
///
/// Only fields that should actually overwrite the stored value are `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.in_stock.is_none()
    }

    /// Overwrite every present field on `product`. The id is left untouched.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}
