//! Fuzz testing for product payload decoding and validation.
//!
//! Feeds arbitrary bytes through the same decode-then-validate path the
//! create and update handlers use. Neither step may panic, and a payload that
//! validates must satisfy the required-field rules.
//!
//! # Running the Fuzz Tests
//!
//! ```bash
//! cargo +nightly install cargo-fuzz
//! cargo +nightly fuzz run fuzz_product_payload -- -max_total_time=60
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use products_api::models::{CreateProductRequest, UpdateProductRequest};
use products_api::validation::{normalize_update, validate_new_product, validate_search_term};

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<CreateProductRequest>(data)
        && let Ok(product) = validate_new_product(request)
    {
        assert!(!product.name.is_empty());
        assert!(!product.description.is_empty());
        assert!(!product.category.is_empty());
        assert!(!product.price.is_zero());
    }

    if let Ok(request) = serde_json::from_slice::<UpdateProductRequest>(data) {
        let patch = normalize_update(request);
        assert!(patch.name.as_deref().is_none_or(|s| !s.is_empty()));
        assert!(patch.price.is_none_or(|p| !p.is_zero()));
    }

    if let Ok(s) = std::str::from_utf8(data) {
        let _ = validate_search_term(Some(s.to_string()));
    }
});
