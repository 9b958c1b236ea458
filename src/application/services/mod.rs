//! Business logic services for the application layer.

pub mod landing_service;

pub use landing_service::{CheckOutcome, FormReset, LandingService, SessionOutcome};
