use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Application-wide error types with appropriate HTTP status codes.
///
/// Every failure raised anywhere in the request pipeline (authentication,
/// body/query decoding, validation, store lookups) is one of these variants.
/// The `IntoResponse` impl below is the only place a failure response is
/// built.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status carried by this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable failure kind reported in the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFoundError",
            AppError::Validation(_) => "ValidationError",
            AppError::Unauthorized(_) => "UnauthorizedError",
            AppError::PayloadTooLarge(_) => "PayloadTooLargeError",
            AppError::Internal(_) | AppError::Config(_) => "ServerError",
        }
    }

    /// Message safe to show to clients.
    ///
    /// Client errors echo their message; server errors never expose details.
    fn public_message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::PayloadTooLarge(msg) => msg,
            AppError::Internal(_) | AppError::Config(_) => "Internal Server Error",
        }
    }
}

/// Uniform error envelope returned for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "Request failed");
        } else {
            tracing::warn!(error = %self, kind = self.kind(), "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.kind().to_string(),
            message: self.public_message().to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitize serde error messages to avoid leaking internal type information.
///
/// Serde errors can contain internal struct/field names which shouldn't be
/// exposed to external clients. This keeps the useful parts.
pub fn sanitize_serde_error(msg: &str) -> String {
    if msg.contains("missing field")
        && let Some(start) = msg.find('`')
        && let Some(end) = msg[start + 1..].find('`')
    {
        let field = &msg[start + 1..start + 1 + end];
        return format!("Missing required field: {field}");
    }

    if msg.contains("invalid type") || msg.contains("invalid value") {
        return "Invalid data type in request body".to_string();
    }

    if msg.contains("EOF while parsing") || msg.contains("expected") {
        return "Malformed JSON in request body".to_string();
    }

    "Invalid request format".to_string()
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
