//! Helpers shared by the landing flow and its adapters.
//!
//! - [`site_url`] - site URL validation and default-scheme completion

pub mod site_url;
