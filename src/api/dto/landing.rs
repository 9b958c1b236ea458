//! DTOs for the landing actions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::StatusRegion;

/// Page context the landing script forwards with an API call.
///
/// The page knows its own query string and `document.referrer`; the request
/// headers of the API call only describe the landing page itself.
#[derive(Debug, Default, Deserialize)]
pub struct PageContext {
    /// `window.location.search` of the landing page.
    #[serde(default)]
    pub query: Option<String>,
    /// `document.referrer` of the landing page.
    #[serde(default)]
    pub referrer: Option<String>,
}

/// Request to start a bot session.
#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    #[serde(flatten)]
    pub page: PageContext,
}

/// Form submission with the site to check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Raw field value; blur normalization is applied server-side.
    pub url: String,

    #[serde(flatten)]
    pub page: PageContext,
}

/// Session started; the page should open `deep_link` in a new tab.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub deep_link: String,
    pub status: StatusRegion,
}

/// Check accepted; the page should open `deep_link` and clear the form
/// after `reset_after_ms`.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub site_url: String,
    pub deep_link: String,
    pub status: StatusRegion,
    pub reset_after_ms: u64,
}
