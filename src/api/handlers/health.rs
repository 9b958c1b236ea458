//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status and which integrations are configured.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers 200: every integration is optional and its absence only
/// disables a side effect.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "bot": "site_SEO_cheker_bot",
///   "checks": {
///     "tracking": { "status": "enabled", "message": "POST https://.../api/track-session" },
///     "metrika": { "status": "disabled" },
///     "gtag": { "status": "enabled", "message": "Measurement protocol" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = &state.landing_service;

    let tracking = match service.reporter().transport().describe() {
        target if target == "disabled" => CheckStatus::disabled(),
        target => CheckStatus::enabled(target),
    };

    let analytics = service.analytics();
    let metrika = if analytics.has_metrika() {
        CheckStatus::enabled("Measurement protocol")
    } else {
        CheckStatus::disabled()
    };
    let gtag = if analytics.has_gtag() {
        CheckStatus::enabled("Measurement protocol")
    } else {
        CheckStatus::disabled()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bot: service.links().bot_username().to_string(),
        checks: HealthChecks {
            tracking,
            metrika,
            gtag,
        },
    })
}
