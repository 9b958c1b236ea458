//! View-model pieces of the landing page shared by the HTTP and CLI adapters.
//!
//! - [`status_region`] - the status block (icon, text, visibility)
//! - [`site_url_field`] - the site URL input with blur normalization
//! - [`recorded_view`] - a view that records flow calls for later rendering

pub mod recorded_view;
pub mod site_url_field;
pub mod status_region;

pub use recorded_view::{RecordedView, ViewSnapshot};
pub use site_url_field::SiteUrlField;
pub use status_region::StatusRegion;
