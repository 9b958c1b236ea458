//! Presentation collaborator driven by the landing flow.

use crate::domain::deep_link::DeepLink;
use crate::domain::status::StatusKind;

/// The UI the flow reports into: a status region, a way to open links in a
/// new browsing context and the site URL form.
///
/// Calls are fire-and-forget; the flow never waits for confirmation that a
/// link was actually opened.
#[cfg_attr(test, mockall::automock)]
pub trait LandingView: Send + Sync {
    /// Overwrites the status region with `kind` and `message`.
    fn show_status(&self, kind: StatusKind, message: &str);

    /// Requests navigation to `link` in a new browsing context.
    fn open_in_new_context(&self, link: &DeepLink);

    /// Clears the site URL form.
    fn reset_form(&self);
}
