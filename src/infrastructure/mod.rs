//! Infrastructure layer: network-facing implementations of the domain ports.
//!
//! - [`tracking`] - tracking transports (HTTP, no-op)
//! - [`analytics`] - measurement-protocol analytics integrations

pub mod analytics;
pub mod tracking;
