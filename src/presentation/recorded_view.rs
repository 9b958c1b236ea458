//! A [`LandingView`] that records what the flow asked for.
//!
//! The HTTP adapter cannot touch the visitor's page directly, so it lets the
//! flow run against a `RecordedView` and renders the snapshot into the
//! response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::deep_link::DeepLink;
use crate::domain::ports::LandingView;
use crate::domain::status::StatusKind;
use crate::presentation::status_region::StatusRegion;

#[derive(Debug, Default)]
pub struct RecordedView {
    status: Mutex<StatusRegion>,
    opened: Mutex<Vec<DeepLink>>,
    form_resets: AtomicUsize,
}

/// Point-in-time copy of a [`RecordedView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub status: StatusRegion,
    pub opened: Vec<DeepLink>,
    pub form_resets: usize,
}

impl ViewSnapshot {
    /// The most recently opened deep link, if any.
    pub fn last_opened(&self) -> Option<&DeepLink> {
        self.opened.last()
    }
}

impl RecordedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            status: lock(&self.status).clone(),
            opened: lock(&self.opened).clone(),
            form_resets: self.form_resets.load(Ordering::SeqCst),
        }
    }
}

impl LandingView for RecordedView {
    fn show_status(&self, kind: StatusKind, message: &str) {
        lock(&self.status).show(kind, message);
    }

    fn open_in_new_context(&self, link: &DeepLink) {
        lock(&self.opened).push(link.clone());
    }

    fn reset_form(&self) {
        self.form_resets.fetch_add(1, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
