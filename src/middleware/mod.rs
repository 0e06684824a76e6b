//! HTTP middleware for the request pipeline.
//!
//! # Architecture
//!
//! ```text
//! Request → Logger → Auth (/api only) → [ValidProduct on create] → Handler
//!             ↓          ↓                     ↓
//!      X-Request-Id   401 Unauth         400 Validation
//! ```
//!
//! Every rejection is an [`AppError`](crate::error::AppError), so all of them
//! leave through the same error envelope.

pub mod auth;
pub mod logger;
pub mod validate;

pub use auth::{API_KEY_HEADER, ApiKeyAuth};
pub use logger::{REQUEST_ID_HEADER, log_request};
pub use validate::ValidProduct;
