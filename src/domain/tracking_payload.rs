//! Tracking payload sent to the backend for every user action.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::domain::visit::{UtmParams, VisitContext};

/// A CTA click: session identifier plus traffic source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPayload {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub utm: UtmParams,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// A form submission: the site the visitor wants checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCheckPayload {
    pub site_url: String,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

/// Body of the tracking `POST`.
///
/// Built once per user action and never mutated afterwards. Serialized
/// without a discriminator; absent optional fields become JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrackingPayload {
    Session(SessionPayload),
    SiteCheck(SiteCheckPayload),
}

impl TrackingPayload {
    pub fn session(session_id: Uuid, visit: &VisitContext) -> Self {
        Self::Session(SessionPayload {
            session_id,
            utm: visit.utm.clone(),
            referrer: visit.referrer.clone(),
            user_agent: visit.user_agent.clone(),
        })
    }

    pub fn site_check(site_url: &str, timestamp: DateTime<Utc>, visit: &VisitContext) -> Self {
        Self::SiteCheck(SiteCheckPayload {
            site_url: site_url.to_string(),
            timestamp,
            user_agent: visit.user_agent.clone(),
            referrer: visit.referrer.clone(),
        })
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackingPayload::Session(_) => "session",
            TrackingPayload::SiteCheck(_) => "site_check",
        }
    }
}

/// `2024-05-01T12:30:00.000Z`, the shape `Date.prototype.toISOString` produces.
fn serialize_iso8601<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
