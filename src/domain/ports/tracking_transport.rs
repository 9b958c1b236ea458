//! Transport for tracking payloads.

use async_trait::async_trait;

use crate::domain::tracking_payload::TrackingPayload;

/// Why a tracking request did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("Tracking request failed: {0}")]
    Transport(String),

    #[error("Tracking endpoint answered with status {0}")]
    UnexpectedStatus(u16),
}

/// Delivers one payload to the tracking backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::tracking::HttpTrackingTransport`] - JSON `POST` to the endpoint
/// - [`crate::infrastructure::tracking::NullTrackingTransport`] - tracking disabled
///
/// Implementations report failures through the return value. Swallowing and
/// logging them is the job of [`crate::domain::reporter::TrackingReporter`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingTransport: Send + Sync {
    /// Sends `payload` once. No retries.
    async fn send(&self, payload: &TrackingPayload) -> Result<(), TrackingError>;

    /// Human-readable target, for health checks and logs.
    fn describe(&self) -> String;
}
