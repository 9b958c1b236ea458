//! Broadcast of named events to whichever analytics integrations are present.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::ports::{GtagApi, MetrikaApi};

pub const EVENT_TELEGRAM_BOT_OPENED: &str = "telegram_bot_opened";
pub const EVENT_SITE_CHECK_REQUESTED: &str = "site_check_requested";

/// Yandex.Metrica capability bound to its counter.
#[derive(Clone)]
pub struct MetrikaCapability {
    pub counter_id: u64,
    pub api: Arc<dyn MetrikaApi>,
}

/// Forwards events to the optional integrations.
///
/// An absent integration is skipped silently. Nothing is buffered: an event
/// emitted while no integration is configured is only logged.
#[derive(Clone, Default)]
pub struct AnalyticsEmitter {
    metrika: Option<MetrikaCapability>,
    gtag: Option<Arc<dyn GtagApi>>,
}

impl AnalyticsEmitter {
    pub fn new(metrika: Option<MetrikaCapability>, gtag: Option<Arc<dyn GtagApi>>) -> Self {
        Self { metrika, gtag }
    }

    /// An emitter with no integrations.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn has_metrika(&self) -> bool {
        self.metrika.is_some()
    }

    pub fn has_gtag(&self) -> bool {
        self.gtag.is_some()
    }

    pub fn emit(&self, event_name: &str, params: &Value) {
        if let Some(metrika) = &self.metrika {
            metrika
                .api
                .call(metrika.counter_id, "reachGoal", event_name, params);
        }

        if let Some(gtag) = &self.gtag {
            gtag.call("event", event_name, params);
        }

        metrics::counter!("landing_analytics_events_total", "event" => event_name.to_string())
            .increment(1);
        info!(event = event_name, %params, "Event tracked");
    }
}
