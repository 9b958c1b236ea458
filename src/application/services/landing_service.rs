//! The two landing-page actions: open the bot with a session, or with a site to check.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::analytics::{
    AnalyticsEmitter, EVENT_SITE_CHECK_REQUESTED, EVENT_TELEGRAM_BOT_OPENED,
};
use crate::domain::deep_link::{DeepLink, DeepLinkBuilder, new_session_id};
use crate::domain::ports::LandingView;
use crate::domain::reporter::{TrackingOutcome, TrackingReporter, TrackingTask};
use crate::domain::status::{
    CHECK_OPENED_MESSAGE, EMPTY_URL_MESSAGE, INVALID_URL_MESSAGE, SESSION_OPENED_MESSAGE,
    StatusKind,
};
use crate::domain::tracking_payload::TrackingPayload;
use crate::domain::visit::VisitContext;
use crate::utils::site_url::{SiteUrlError, validate_site_url};

/// Default pause between a successful check submission and the form reset.
pub const DEFAULT_FORM_RESET_DELAY: Duration = Duration::from_millis(1000);

/// Result of a session action.
#[derive(Debug)]
pub struct SessionOutcome {
    pub session_id: Uuid,
    pub deep_link: DeepLink,
    /// Background tracking request. Dropping it leaves the request running.
    pub tracking: TrackingTask,
}

/// Result of an accepted check submission.
#[derive(Debug)]
pub struct CheckOutcome {
    pub site_url: String,
    pub deep_link: DeepLink,
    pub form_reset: FormReset,
}

/// Background step that waits for tracking, pauses, then clears the form.
#[derive(Debug)]
pub struct FormReset(JoinHandle<TrackingOutcome>);

impl FormReset {
    /// Waits until the form has been reset and returns the tracking outcome.
    pub async fn completed(self) -> TrackingOutcome {
        match self.0.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Form reset task did not complete: {}", e);
                TrackingOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Orchestrates tracking, deep-link opening, analytics and status updates.
///
/// Each action is independent: nothing is shared between two clicks except
/// the immutable configuration held here. Navigation is never gated on the
/// tracking request.
#[derive(Clone)]
pub struct LandingService {
    links: DeepLinkBuilder,
    reporter: TrackingReporter,
    analytics: AnalyticsEmitter,
    form_reset_delay: Duration,
}

impl LandingService {
    pub fn new(
        links: DeepLinkBuilder,
        reporter: TrackingReporter,
        analytics: AnalyticsEmitter,
    ) -> Self {
        Self {
            links,
            reporter,
            analytics,
            form_reset_delay: DEFAULT_FORM_RESET_DELAY,
        }
    }

    pub fn with_form_reset_delay(mut self, delay: Duration) -> Self {
        self.form_reset_delay = delay;
        self
    }

    pub fn form_reset_delay(&self) -> Duration {
        self.form_reset_delay
    }

    pub fn links(&self) -> &DeepLinkBuilder {
        &self.links
    }

    pub fn reporter(&self) -> &TrackingReporter {
        &self.reporter
    }

    pub fn analytics(&self) -> &AnalyticsEmitter {
        &self.analytics
    }

    /// CTA click: new session, tracking in the background, bot opened.
    ///
    /// Must be called within a tokio runtime.
    pub fn start_session(&self, view: &dyn LandingView, visit: &VisitContext) -> SessionOutcome {
        let session_id = new_session_id();

        let tracking = self
            .reporter
            .spawn(TrackingPayload::session(session_id, visit));

        let deep_link = self.links.session(session_id);
        self.open(view, &deep_link);

        self.analytics.emit(
            EVENT_TELEGRAM_BOT_OPENED,
            &json!({ "session_id": session_id.to_string() }),
        );

        view.show_status(StatusKind::Success, SESSION_OPENED_MESSAGE);

        info!(%session_id, "Session started");

        SessionOutcome {
            session_id,
            deep_link,
            tracking,
        }
    }

    /// Form submit: validate the site URL, then open the bot with it.
    ///
    /// On a rejected URL the error status is shown and nothing else happens:
    /// no tracking request, no deep link.
    ///
    /// On success the form is reset in the background once tracking has
    /// finished and the reset delay has passed.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the [`SiteUrlError`] that halted the flow.
    pub fn check_site(
        &self,
        view: Arc<dyn LandingView>,
        raw_url: &str,
        visit: &VisitContext,
    ) -> Result<CheckOutcome, SiteUrlError> {
        if let Err(e) = validate_site_url(raw_url) {
            debug!("Rejected site URL {:?}: {}", raw_url, e);
            let message = match e {
                SiteUrlError::Empty => EMPTY_URL_MESSAGE,
                _ => INVALID_URL_MESSAGE,
            };
            view.show_status(StatusKind::Error, message);
            return Err(e);
        }

        let site_url = raw_url.trim().to_string();

        let tracking = self
            .reporter
            .spawn(TrackingPayload::site_check(&site_url, Utc::now(), visit));

        let deep_link = self.links.site_check(&site_url);
        self.open(view.as_ref(), &deep_link);

        self.analytics
            .emit(EVENT_SITE_CHECK_REQUESTED, &json!({ "site_url": &site_url }));

        view.show_status(StatusKind::Success, CHECK_OPENED_MESSAGE);

        info!(%site_url, "Site check requested");

        let delay = self.form_reset_delay;
        let form_reset = FormReset(tokio::spawn(async move {
            let outcome = tracking.outcome().await;
            tokio::time::sleep(delay).await;
            view.reset_form();
            outcome
        }));

        Ok(CheckOutcome {
            site_url,
            deep_link,
            form_reset,
        })
    }

    fn open(&self, view: &dyn LandingView, deep_link: &DeepLink) {
        if deep_link.exceeds_start_limit() {
            warn!(
                "Deep link start parameter is longer than Telegram accepts: {}",
                deep_link
            );
        }
        view.open_in_new_context(deep_link);
    }
}
