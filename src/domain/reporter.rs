//! Best-effort delivery of tracking payloads.
//!
//! Tracking never affects the visitor: every failure is logged and counted
//! here and turned into a [`TrackingOutcome`], so callers cannot observe a
//! rejected request.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ports::TrackingTransport;
use crate::domain::tracking_payload::TrackingPayload;

/// What happened to a tracking request. Purely informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingOutcome {
    Delivered,
    Failed(String),
}

impl TrackingOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, TrackingOutcome::Delivered)
    }
}

/// Handle to a tracking request running in the background.
///
/// Dropping it detaches the request; it still runs to completion.
#[derive(Debug)]
pub struct TrackingTask(JoinHandle<TrackingOutcome>);

impl TrackingTask {
    /// Waits for the request to finish. A panicked task counts as a failure.
    pub async fn outcome(self) -> TrackingOutcome {
        match self.0.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Tracking task did not complete: {}", e);
                TrackingOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Sends tracking payloads through a [`TrackingTransport`] and swallows errors.
#[derive(Clone)]
pub struct TrackingReporter {
    transport: Arc<dyn TrackingTransport>,
}

impl TrackingReporter {
    pub fn new(transport: Arc<dyn TrackingTransport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn TrackingTransport> {
        &self.transport
    }

    /// Sends `payload` and reports the result without ever failing.
    pub async fn report(&self, payload: &TrackingPayload) -> TrackingOutcome {
        let kind = payload.kind();

        match self.transport.send(payload).await {
            Ok(()) => {
                debug!(kind, "Tracking payload delivered");
                metrics::counter!("landing_tracking_total", "kind" => kind, "result" => "delivered")
                    .increment(1);
                TrackingOutcome::Delivered
            }
            Err(e) => {
                warn!(kind, "Failed to track session: {}", e);
                metrics::counter!("landing_tracking_total", "kind" => kind, "result" => "failed")
                    .increment(1);
                TrackingOutcome::Failed(e.to_string())
            }
        }
    }

    /// Starts [`Self::report`] on the runtime and returns immediately.
    pub fn spawn(&self, payload: TrackingPayload) -> TrackingTask {
        let reporter = self.clone();
        TrackingTask(tokio::spawn(
            async move { reporter.report(&payload).await },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockTrackingTransport, TrackingError};
    use crate::domain::visit::VisitContext;
    use uuid::Uuid;

    fn session_payload() -> TrackingPayload {
        TrackingPayload::session(Uuid::new_v4(), &VisitContext::default())
    }

    #[tokio::test]
    async fn test_report_delivered() {
        let mut transport = MockTrackingTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));

        let reporter = TrackingReporter::new(Arc::new(transport));
        let outcome = reporter.report(&session_payload()).await;

        assert_eq!(outcome, TrackingOutcome::Delivered);
    }

    #[tokio::test]
    async fn test_report_swallows_transport_error() {
        let mut transport = MockTrackingTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(TrackingError::Transport("connection refused".to_string())));

        let reporter = TrackingReporter::new(Arc::new(transport));
        let outcome = reporter.report(&session_payload()).await;

        assert!(matches!(outcome, TrackingOutcome::Failed(reason) if reason.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_report_swallows_non_success_status() {
        let mut transport = MockTrackingTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(TrackingError::UnexpectedStatus(502)));

        let reporter = TrackingReporter::new(Arc::new(transport));

        assert!(!reporter.report(&session_payload()).await.is_delivered());
    }

    #[tokio::test]
    async fn test_spawned_report_can_be_awaited() {
        let mut transport = MockTrackingTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));

        let reporter = TrackingReporter::new(Arc::new(transport));
        let task = reporter.spawn(session_payload());

        assert!(task.outcome().await.is_delivered());
    }

    #[tokio::test]
    async fn test_spawned_report_sends_exact_payload() {
        let payload = session_payload();
        let expected = payload.clone();

        let mut transport = MockTrackingTransport::new();
        transport
            .expect_send()
            .withf(move |p| *p == expected)
            .times(1)
            .returning(|_| Ok(()));

        let reporter = TrackingReporter::new(Arc::new(transport));
        reporter.spawn(payload).outcome().await;
    }
}
