//! Request extractors that report decoding failures as [`AppError`].
//!
//! Axum's stock `Json` and `Query` extractors answer with their own plain-text
//! rejections. These wrappers route those failures through the error
//! envelope instead.
//!
//! A body sent without a JSON content type is read as an empty object, so a
//! create without `Content-Type` fails field validation like any other
//! incomplete payload.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AppError, sanitize_serde_error};

/// JSON body extractor with envelope-style rejections.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                debug!("Body without JSON content type read as an empty object");
                serde_json::from_value(Value::Object(Map::new()))
                    .map(Self)
                    .map_err(|err| AppError::Validation(sanitize_serde_error(&err.to_string())))
            }
            Err(rejection) => Err(json_rejection_to_error(&rejection)),
        }
    }
}

/// Query string extractor with envelope-style rejections.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "Query string rejected");
                Err(AppError::Validation("Invalid query string".to_string()))
            }
        }
    }
}

fn json_rejection_to_error(rejection: &JsonRejection) -> AppError {
    debug!(reason = %rejection.body_text(), "JSON body rejected");

    let message = match rejection {
        JsonRejection::JsonDataError(err) => sanitize_serde_error(&err.body_text()),
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON in request body".to_string(),
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return AppError::PayloadTooLarge("Request body too large".to_string());
        }
        _ => "Invalid request format".to_string(),
    };

    AppError::Validation(message)
}
