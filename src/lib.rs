//! # SEO Landing
//!
//! Backend for the SEO checker landing page. Every visitor action ends with a
//! Telegram deep link to the checker bot; along the way a best-effort tracking
//! request is sent and analytics integrations are notified.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Deep links, tracking payloads, ports
//! - **Application Layer** ([`application`]) - The session and site-check actions
//! - **Infrastructure Layer** ([`infrastructure`]) - Tracking transport and analytics over HTTP
//! - **Presentation** ([`presentation`]) - Status region and form field view models
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Actions
//!
//! - **Session**: generate a session id, track UTM/referrer/user agent,
//!   open `https://t.me/<bot>?start=session_<uuid>`
//! - **Site check**: validate the URL, track it, open
//!   `https://t.me/<bot>?start=check_<percent-encoded url>`, reset the form
//!
//! Tracking and analytics failures never affect the visitor.
//!
//! ## Quick Start
//!
//! ```bash
//! export TELEGRAM_BOT_USERNAME="site_SEO_cheker_bot"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LandingService;
    pub use crate::domain::deep_link::{DeepLink, DeepLinkBuilder, StartToken};
    pub use crate::domain::ports::{LandingView, TrackingTransport};
    pub use crate::domain::status::StatusKind;
    pub use crate::domain::visit::{UtmParams, VisitContext};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
