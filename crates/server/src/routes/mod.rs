//! API route handlers
//!
//! - `health`: liveness, readiness and metrics
//! - `photos`: the swipe deck
//! - `profile`: the bio panel profile

pub mod health;
pub mod photos;
pub mod profile;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
///
/// ```json
/// {
///   "name": "SwipeCard Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "SwipeCard Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/photos",
            "/profile",
            "/api/photos",
            "/api/profile",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
