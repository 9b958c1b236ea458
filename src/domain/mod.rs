//! Domain layer: the landing flow's data and its seams.
//!
//! # Architecture
//!
//! - [`visit`] - UTM tags and visitor metadata
//! - [`tracking_payload`] - body of the tracking request
//! - [`deep_link`] - Telegram deep links and `start` tokens
//! - [`status`] - status kinds and messages
//! - [`reporter`] - best-effort tracking delivery
//! - [`analytics`] - broadcast to optional analytics integrations
//! - [`ports`] - traits implemented by infrastructure and presentation
//!
//! # Action Flow
//!
//! 1. The presentation layer collects a [`visit::VisitContext`]
//! 2. A [`tracking_payload::TrackingPayload`] is built and handed to
//!    [`reporter::TrackingReporter::spawn`] (non-blocking)
//! 3. A [`deep_link::DeepLink`] is built and opened
//! 4. The event is broadcast via [`analytics::AnalyticsEmitter`]

pub mod analytics;
pub mod deep_link;
pub mod ports;
pub mod reporter;
pub mod status;
pub mod tracking_payload;
pub mod visit;
