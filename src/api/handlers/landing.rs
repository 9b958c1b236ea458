//! Handlers for the landing actions.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::dto::landing::{
    CheckRequest, CheckResponse, PageContext, SessionRequest, SessionResponse,
};
use crate::domain::visit::{UtmParams, VisitContext};
use crate::error::AppError;
use crate::presentation::{RecordedView, SiteUrlField};
use crate::state::AppState;

/// CTA link: starts a session and redirects to the bot.
///
/// # Endpoint
///
/// `GET /start?utm_source=...`
///
/// # Request Flow
///
/// 1. UTM tags are read from the query string, referrer and user agent from headers
/// 2. Session tracking is sent in the background
/// 3. Returns 303 See Other to `https://t.me/<bot>?start=session_<uuid>`
///
/// The redirect never waits for the tracking request.
pub async fn start_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> impl IntoResponse {
    let visit = VisitContext::new(
        UtmParams::from_query(query.as_deref().unwrap_or_default()),
        header_str(&headers, header::REFERER),
        header_str(&headers, header::USER_AGENT),
    );

    let view = RecordedView::new();
    let outcome = state.landing_service.start_session(&view, &visit);

    Redirect::to(outcome.deep_link.as_str())
}

/// Starts a session for the page script.
///
/// # Endpoint
///
/// `POST /api/session`
///
/// # Request Body (optional)
///
/// ```json
/// { "query": "?utm_source=yandex", "referrer": "https://ya.ru/" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "session_id": "6f1c...",
///   "deep_link": "https://t.me/site_SEO_cheker_bot?start=session_6f1c...",
///   "status": { "visible": true, "kind": "success", "icon": "✅", "text": "...", ... }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is present but is not valid JSON.
pub async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SessionResponse>, AppError> {
    let request: SessionRequest = parse_optional_body(&body)?;
    let visit = visit_from_page(&request.page, &headers);

    let view = RecordedView::new();
    let outcome = state.landing_service.start_session(&view, &visit);

    Ok(Json(SessionResponse {
        session_id: outcome.session_id,
        deep_link: outcome.deep_link.into_string(),
        status: view.snapshot().status,
    }))
}

/// Submits the site check form.
///
/// # Endpoint
///
/// `POST /api/check`
///
/// # Request Body
///
/// ```json
/// { "url": "example.ru", "query": "?utm_source=vk", "referrer": null }
/// ```
///
/// The value is completed with `https://` first, as on field blur.
///
/// # Response
///
/// ```json
/// {
///   "site_url": "https://example.ru",
///   "deep_link": "https://t.me/site_SEO_cheker_bot?start=check_https%3A%2F%2Fexample.ru",
///   "status": { "kind": "success", ... },
///   "reset_after_ms": 1000
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the error status in `error.details.status`
/// when the URL is rejected. No tracking is sent in that case.
///
/// Returns 400 Bad Request if the body is not valid JSON or lacks `url`.
pub async fn check_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckResponse>, AppError> {
    let request: CheckRequest = parse_body(&body)?;
    let visit = visit_from_page(&request.page, &headers);

    let mut field = SiteUrlField::new(request.url);
    field.on_blur();

    let view = Arc::new(RecordedView::new());
    let service = &state.landing_service;

    match service.check_site(view.clone(), field.value(), &visit) {
        Ok(outcome) => Ok(Json(CheckResponse {
            site_url: outcome.site_url,
            deep_link: outcome.deep_link.into_string(),
            status: view.snapshot().status,
            reset_after_ms: u64::try_from(service.form_reset_delay().as_millis())
                .unwrap_or(u64::MAX),
        })),
        Err(e) => Err(AppError::bad_request(
            "Invalid site URL",
            json!({
                "reason": e.to_string(),
                "url": field.value(),
                "status": view.snapshot().status,
            }),
        )),
    }
}

fn visit_from_page(page: &PageContext, headers: &HeaderMap) -> VisitContext {
    VisitContext::new(
        UtmParams::from_query(page.query.as_deref().unwrap_or_default()),
        page.referrer.as_deref(),
        header_str(headers, header::USER_AGENT),
    )
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Empty body means "no page context".
fn parse_optional_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    parse_body(body)
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() })))
}
