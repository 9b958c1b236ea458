//! Server-side analytics integrations.
//!
//! The page-level tags are mirrored by their measurement protocols:
//!
//! - [`MetrikaMeasurementProtocol`] - Yandex.Metrica goals
//! - [`Ga4MeasurementProtocol`] - Google Analytics 4 events
//!
//! Each call fires one request on the tokio runtime and returns at once.
//! Failures are logged and never reach the caller.

pub mod ga4;
pub mod metrika;

pub use ga4::Ga4MeasurementProtocol;
pub use metrika::MetrikaMeasurementProtocol;

use serde_json::Value;
use std::future::Future;
use tracing::warn;
use uuid::Uuid;

/// Visitor identifier for a hit: the event's `session_id` when present,
/// otherwise a fresh random one.
fn client_id(params: &Value) -> String {
    params
        .get("session_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Runs `request` in the background, logging a failure under `integration`.
fn spawn_best_effort<F>(integration: &'static str, request: F)
where
    F: Future<Output = Result<reqwest::Response, reqwest::Error>> + Send + 'static,
{
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        warn!(integration, "No async runtime, analytics hit dropped");
        return;
    };

    handle.spawn(async move {
        match request.await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                warn!(integration, status = %response.status(), "Analytics hit rejected");
            }
            Err(e) => warn!(integration, "Analytics hit failed: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_id_prefers_session_id() {
        assert_eq!(client_id(&json!({ "session_id": "abc" })), "abc");
    }

    #[test]
    fn test_client_id_falls_back_to_random_uuid() {
        let id = client_id(&json!({ "site_url": "https://example.ru" }));
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
