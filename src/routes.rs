//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /start`   - CTA link, redirects to the bot (public)
//! - `GET  /health`  - Service and integration status (public)
//! - `/api/*`        - Landing API used by the page script
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, start_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/start", get(start_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::landing_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
