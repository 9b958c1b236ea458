//! What is known about the visitor at the moment of a user action.

use serde::{Deserialize, Serialize};

/// UTM tags copied from the landing page query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
}

impl UtmParams {
    /// Extracts UTM tags from a raw query string (with or without the leading `?`).
    ///
    /// Unrelated parameters are ignored; the first occurrence of a tag wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut utm = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "utm_source" => &mut utm.utm_source,
                "utm_medium" => &mut utm.utm_medium,
                "utm_campaign" => &mut utm.utm_campaign,
                "utm_term" => &mut utm.utm_term,
                "utm_content" => &mut utm.utm_content,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        utm
    }

    pub fn is_empty(&self) -> bool {
        self.utm_source.is_none()
            && self.utm_medium.is_none()
            && self.utm_campaign.is_none()
            && self.utm_term.is_none()
            && self.utm_content.is_none()
    }
}

/// Visitor metadata gathered by the presentation layer.
///
/// All fields are optional; a missing header or tag is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitContext {
    pub utm: UtmParams,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl VisitContext {
    /// Creates a context, treating empty referrer/user-agent strings as absent.
    pub fn new(utm: UtmParams, referrer: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            utm,
            referrer: non_empty(referrer),
            user_agent: non_empty(user_agent),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}
