//! JSON `POST` of tracking payloads to the backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{TrackingError, TrackingTransport};
use crate::domain::tracking_payload::TrackingPayload;

/// Sends each payload as one `POST <endpoint>` with a JSON body.
///
/// Any 2xx status counts as delivered; the response body is never read.
/// The only timeout is the one configured on the underlying client.
#[derive(Debug, Clone)]
pub struct HttpTrackingTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTrackingTransport {
    /// Creates a transport with its own client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (TLS backend).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("seo-landing/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a transport sharing an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TrackingTransport for HttpTrackingTransport {
    async fn send(&self, payload: &TrackingPayload) -> Result<(), TrackingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| TrackingError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, %status, "Tracking endpoint responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(TrackingError::UnexpectedStatus(status.as_u16()))
        }
    }

    fn describe(&self) -> String {
        format!("POST {}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::visit::VisitContext;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTrackingTransport::new(
            format!("http://{addr}/api/track-session"),
            Duration::from_secs(2),
        )
        .unwrap();

        let payload = TrackingPayload::session(Uuid::new_v4(), &VisitContext::default());
        let result = transport.send(&payload).await;

        assert!(matches!(result, Err(TrackingError::Transport(_))));
    }

    #[test]
    fn test_describe() {
        let transport =
            HttpTrackingTransport::new("https://backend.example/api/track-session", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            transport.describe(),
            "POST https://backend.example/api/track-session"
        );
        assert_eq!(transport.endpoint(), "https://backend.example/api/track-session");
    }
}
