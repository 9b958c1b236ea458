//! No-op transport for disabled tracking.

use crate::domain::ports::{TrackingError, TrackingTransport};
use crate::domain::tracking_payload::TrackingPayload;
use async_trait::async_trait;
use tracing::debug;

/// A transport that drops every payload.
///
/// Used when `TRACKING_ENDPOINT` is empty, and in tests that do not care
/// about tracking. Every send succeeds immediately.
pub struct NullTrackingTransport;

impl NullTrackingTransport {
    pub fn new() -> Self {
        debug!("Using NullTrackingTransport (tracking disabled)");
        Self
    }
}

impl Default for NullTrackingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrackingTransport for NullTrackingTransport {
    async fn send(&self, _payload: &TrackingPayload) -> Result<(), TrackingError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}
