use std::sync::Arc;

use crate::application::services::LandingService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub landing_service: Arc<LandingService>,
}

impl AppState {
    pub fn new(landing_service: LandingService) -> Self {
        Self {
            landing_service: Arc::new(landing_service),
        }
    }
}
