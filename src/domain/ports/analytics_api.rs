//! Optional analytics integrations.
//!
//! Each trait mirrors the call surface of the corresponding page-level
//! tag so events can be forwarded unchanged.

use serde_json::Value;

/// Yandex.Metrica, called as `(counter_id, "reachGoal", goal, params)`.
#[cfg_attr(test, mockall::automock)]
pub trait MetrikaApi: Send + Sync {
    fn call(&self, counter_id: u64, action: &str, goal: &str, params: &Value);
}

/// Google Analytics `gtag`, called as `("event", name, params)`.
#[cfg_attr(test, mockall::automock)]
pub trait GtagApi: Send + Sync {
    fn call(&self, command: &str, event_name: &str, params: &Value);
}
