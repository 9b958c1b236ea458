//! API route configuration.
//!
//! Endpoints used by the landing page script. No authentication: every
//! action is anonymous by nature.

use crate::api::handlers::{check_handler, session_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Landing API routes.
///
/// # Endpoints
///
/// - `POST /session` - Start a bot session (CTA button)
/// - `POST /check`   - Submit the site check form
pub fn landing_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(session_handler))
        .route("/check", post(check_handler))
}
