//! Google Analytics 4 events over the measurement protocol.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{client_id, spawn_best_effort};
use crate::domain::ports::GtagApi;

const COLLECT_URL: &str = "https://www.google-analytics.com/mp/collect";

#[derive(Debug, Serialize)]
struct CollectBody<'a> {
    client_id: String,
    events: [CollectEvent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct CollectEvent<'a> {
    name: &'a str,
    params: &'a Value,
}

pub struct Ga4MeasurementProtocol {
    client: reqwest::Client,
    measurement_id: String,
    api_secret: String,
    collect_url: String,
}

impl Ga4MeasurementProtocol {
    pub fn new(
        client: reqwest::Client,
        measurement_id: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            measurement_id: measurement_id.into(),
            api_secret: api_secret.into(),
            collect_url: COLLECT_URL.to_string(),
        }
    }

    /// Points hits at another collector (e.g. `/debug/mp/collect`).
    pub fn with_collect_url(mut self, collect_url: impl Into<String>) -> Self {
        self.collect_url = collect_url.into();
        self
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }
}

fn body<'a>(event_name: &'a str, params: &'a Value) -> CollectBody<'a> {
    CollectBody {
        client_id: client_id(params),
        events: [CollectEvent {
            name: event_name,
            params,
        }],
    }
}

impl GtagApi for Ga4MeasurementProtocol {
    fn call(&self, command: &str, event_name: &str, params: &Value) {
        if command != "event" {
            debug!(command, "Unsupported gtag command ignored");
            return;
        }

        let request = self
            .client
            .post(&self.collect_url)
            .query(&[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.as_str()),
            ])
            .json(&body(event_name, params))
            .send();

        spawn_best_effort("ga4", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_shape() {
        let params = json!({ "session_id": "s-1" });
        let value = serde_json::to_value(body("telegram_bot_opened", &params)).unwrap();

        assert_eq!(
            value,
            json!({
                "client_id": "s-1",
                "events": [
                    { "name": "telegram_bot_opened", "params": { "session_id": "s-1" } }
                ]
            })
        );
    }

    #[test]
    fn test_config_commands_are_ignored() {
        let ga4 = Ga4MeasurementProtocol::new(reqwest::Client::new(), "G-TEST", "secret");
        ga4.call("config", "G-TEST", &json!({}));
        assert_eq!(ga4.measurement_id(), "G-TEST");
    }
}
