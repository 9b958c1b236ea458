//! Application layer orchestrating the landing-page actions.
//!
//! Services consume domain ports and provide a small API for the HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::landing_service::LandingService`] - session and site-check actions

pub mod services;
