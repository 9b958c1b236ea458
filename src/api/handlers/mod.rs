//! HTTP request handlers.

pub mod health;
pub mod landing;

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

pub use health::health_handler;
pub use landing::{check_handler, session_handler, start_handler};

/// Answers unknown routes with the JSON error envelope.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
