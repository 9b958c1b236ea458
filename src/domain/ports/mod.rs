//! Seams between the landing flow and the outside world.
//!
//! The flow only talks to these traits; concrete implementations live in
//! `crate::infrastructure` (network) and in the HTTP/CLI adapters
//! (presentation).
//!
//! - [`TrackingTransport`] - delivers a tracking payload to the backend
//! - [`MetrikaApi`], [`GtagApi`] - optional analytics integrations
//! - [`LandingView`] - status region, navigation and the form
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod analytics_api;
pub mod landing_view;
pub mod tracking_transport;

pub use analytics_api::{GtagApi, MetrikaApi};
pub use landing_view::LandingView;
pub use tracking_transport::{TrackingError, TrackingTransport};

#[cfg(test)]
pub use analytics_api::{MockGtagApi, MockMetrikaApi};
#[cfg(test)]
pub use landing_view::MockLandingView;
#[cfg(test)]
pub use tracking_transport::MockTrackingTransport;
