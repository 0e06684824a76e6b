//! Field validation stage for product creation.
//!
//! [`ValidProduct`] decodes the JSON body and enforces the required-field
//! rule before the create handler runs. A handler that takes it as an
//! argument is only ever invoked with a complete product.

use axum::extract::{FromRequest, Request};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{CreateProductRequest, NewProduct};
use crate::validation::validate_new_product;

/// A create payload that passed field validation.
#[derive(Debug)]
pub struct ValidProduct(pub NewProduct);

impl<S> FromRequest<S> for ValidProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(payload) = ApiJson::<CreateProductRequest>::from_request(req, state).await?;
        validate_new_product(payload).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;

    use super::*;
    use crate::validation::MISSING_FIELDS_MESSAGE;

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_complete_payload_passes() {
        let req = json_request(
            r#"{"name":"Pen","description":"Blue ink","price":2,"category":"office"}"#,
        );
        let ValidProduct(product) = ValidProduct::from_request(req, &()).await.unwrap();

        assert_eq!(product.category, "office");
        assert!(product.in_stock);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_generically() {
        let req = json_request(r#"{"name":"Pen","description":"Blue ink","category":"office"}"#);
        let err = ValidProduct::from_request(req, &()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_wrong_type_is_rejected() {
        let req = json_request(
            r#"{"name":"Pen","description":"Blue ink","price":2,"category":"office","inStock":"yes"}"#,
        );
        let err = ValidProduct::from_request(req, &()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
