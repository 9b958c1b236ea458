//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::{Request, header};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span per request with method, path and user agent.
///
/// Only the path is recorded: the query string carries UTM tags and is
/// already part of the tracking payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingMakeSpan;

impl MakeSpan<Body> for LandingMakeSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            user_agent,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/start user_agent=Mozilla/5.0}: finished processing request latency=3 ms status=303
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, LandingMakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(LandingMakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
