//! Tracking transports.
//!
//! - [`HttpTrackingTransport`] - JSON `POST` to the tracking backend
//! - [`NullTrackingTransport`] - no-op when tracking is disabled

pub mod http_transport;
pub mod null_transport;

pub use http_transport::HttpTrackingTransport;
pub use null_transport::NullTrackingTransport;
