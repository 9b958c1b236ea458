//! Site URL input of the check form.

use crate::utils::site_url::with_default_scheme;

/// Text field holding the site URL the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteUrlField {
    value: String,
}

impl SiteUrlField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Focus left the field: complete the value with `https://` if needed.
    pub fn on_blur(&mut self) {
        self.value = with_default_scheme(&self.value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
