#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use seo_landing::api::handlers::{check_handler, health_handler, session_handler, start_handler};
use seo_landing::application::services::LandingService;
use seo_landing::domain::analytics::AnalyticsEmitter;
use seo_landing::domain::deep_link::DeepLinkBuilder;
use seo_landing::domain::ports::{TrackingError, TrackingTransport};
use seo_landing::domain::reporter::TrackingReporter;
use seo_landing::domain::tracking_payload::TrackingPayload;
use seo_landing::infrastructure::tracking::NullTrackingTransport;
use seo_landing::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const BOT: &str = "site_SEO_cheker_bot";

/// Forwards every payload to the test, optionally failing afterwards.
pub struct ChannelTransport {
    tx: mpsc::UnboundedSender<TrackingPayload>,
    fail: bool,
}

#[async_trait]
impl TrackingTransport for ChannelTransport {
    async fn send(&self, payload: &TrackingPayload) -> Result<(), TrackingError> {
        let _ = self.tx.send(payload.clone());
        if self.fail {
            Err(TrackingError::UnexpectedStatus(500))
        } else {
            Ok(())
        }
    }

    fn describe(&self) -> String {
        "POST http://tracking.test/api/track-session".to_string()
    }
}

fn state_with(transport: Arc<dyn TrackingTransport>) -> AppState {
    AppState::new(LandingService::new(
        DeepLinkBuilder::new(BOT),
        TrackingReporter::new(transport),
        AnalyticsEmitter::disabled(),
    ))
}

pub fn create_test_state() -> (AppState, mpsc::UnboundedReceiver<TrackingPayload>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = state_with(Arc::new(ChannelTransport { tx, fail: false }));
    (state, rx)
}

/// Tracking endpoint that accepts the request and answers 500.
pub fn create_failing_state() -> (AppState, mpsc::UnboundedReceiver<TrackingPayload>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = state_with(Arc::new(ChannelTransport { tx, fail: true }));
    (state, rx)
}

pub fn create_untracked_state() -> AppState {
    state_with(Arc::new(NullTrackingTransport::new()))
}

pub fn landing_app(state: AppState) -> Router {
    Router::new()
        .route("/start", get(start_handler))
        .route("/health", get(health_handler))
        .route("/api/session", post(session_handler))
        .route("/api/check", post(check_handler))
        .with_state(state)
}

pub async fn next_payload(rx: &mut mpsc::UnboundedReceiver<TrackingPayload>) -> TrackingPayload {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("tracking payload was not sent")
        .expect("tracking channel closed")
}

pub async fn assert_no_payload(rx: &mut mpsc::UnboundedReceiver<TrackingPayload>) {
    let received = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(received.is_err(), "unexpected tracking payload: {:?}", received);
}
