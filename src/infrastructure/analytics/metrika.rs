//! Yandex.Metrica goals over the measurement protocol.

use serde_json::Value;
use tracing::debug;

use super::{client_id, spawn_best_effort};
use crate::domain::ports::MetrikaApi;

const COLLECT_URL: &str = "https://mc.yandex.ru/collect/";

pub struct MetrikaMeasurementProtocol {
    client: reqwest::Client,
    measurement_token: String,
    collect_url: String,
}

impl MetrikaMeasurementProtocol {
    pub fn new(client: reqwest::Client, measurement_token: impl Into<String>) -> Self {
        Self {
            client,
            measurement_token: measurement_token.into(),
            collect_url: COLLECT_URL.to_string(),
        }
    }

    /// Points hits at another collector (used in tests).
    pub fn with_collect_url(mut self, collect_url: impl Into<String>) -> Self {
        self.collect_url = collect_url.into();
        self
    }

    /// Hit query; goal parameters travel as a JSON object in `params`.
    fn query(&self, counter_id: u64, goal: &str, params: &Value) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("tid", counter_id.to_string()),
            ("cid", client_id(params)),
            ("t", "event".to_string()),
            ("ea", goal.to_string()),
            ("ms", self.measurement_token.clone()),
        ];

        if params.as_object().is_some_and(|p| !p.is_empty()) {
            query.push(("params", params.to_string()));
        }

        query
    }
}

impl MetrikaApi for MetrikaMeasurementProtocol {
    fn call(&self, counter_id: u64, action: &str, goal: &str, params: &Value) {
        if action != "reachGoal" {
            debug!(action, "Unsupported Metrica action ignored");
            return;
        }

        let request = self
            .client
            .get(&self.collect_url)
            .query(&self.query(counter_id, goal, params))
            .send();

        spawn_best_effort("metrika", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_shape() {
        let metrika = MetrikaMeasurementProtocol::new(reqwest::Client::new(), "secret-token");
        let query = metrika.query(12345, "telegram_bot_opened", &json!({ "session_id": "s-1" }));

        assert_eq!(
            query,
            vec![
                ("tid", "12345".to_string()),
                ("cid", "s-1".to_string()),
                ("t", "event".to_string()),
                ("ea", "telegram_bot_opened".to_string()),
                ("ms", "secret-token".to_string()),
                ("params", r#"{"session_id":"s-1"}"#.to_string()),
            ]
        );
    }

    #[test]
    fn test_query_carries_goal_params() {
        let metrika = MetrikaMeasurementProtocol::new(reqwest::Client::new(), "tok");
        let query = metrika.query(
            1,
            "site_check_requested",
            &json!({ "site_url": "https://example.ru" }),
        );

        let params = query
            .iter()
            .find(|(key, _)| *key == "params")
            .map(|(_, value)| serde_json::from_str::<Value>(value).unwrap())
            .expect("params missing from hit");
        assert_eq!(params["site_url"], "https://example.ru");
    }

    #[test]
    fn test_empty_params_are_omitted() {
        let metrika = MetrikaMeasurementProtocol::new(reqwest::Client::new(), "tok");
        let query = metrika.query(1, "goal", &json!({}));

        assert!(query.iter().all(|(key, _)| *key != "params"));
    }

    #[test]
    fn test_call_outside_runtime_does_not_panic() {
        let metrika = MetrikaMeasurementProtocol::new(reqwest::Client::new(), "t")
            .with_collect_url("http://127.0.0.1:9/collect");
        metrika.call(1, "reachGoal", "goal", &json!({}));
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let metrika = MetrikaMeasurementProtocol::new(reqwest::Client::new(), "t");
        metrika.call(1, "hit", "https://example.ru", &json!({}));
    }
}
