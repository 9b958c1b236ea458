//! Status block shown under the CTA and the form.

use serde::Serialize;

use crate::domain::status::StatusKind;

const BASE_CLASS: &str = "status-message";

/// Current contents of the status block.
///
/// Ephemeral: every [`StatusRegion::show`] overwrites the previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusRegion {
    pub visible: bool,
    pub kind: Option<StatusKind>,
    pub icon: String,
    pub text: String,
    pub class_name: String,
    /// Set when the block asked to be scrolled into view (smooth, nearest).
    pub scroll_into_view: bool,
}

impl StatusRegion {
    pub fn show(&mut self, kind: StatusKind, message: &str) {
        self.visible = true;
        self.kind = Some(kind);
        self.icon = kind.icon().to_string();
        self.text = message.to_string();
        self.class_name = format!("{BASE_CLASS} {BASE_CLASS}--{kind}");
        self.scroll_into_view = true;
    }
}
