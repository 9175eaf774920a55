//! Application state.

use std::sync::Arc;
use urlrisk_core::Scanner;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub scanner: Arc<Scanner>,
}

impl AppState {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner: Arc::new(scanner),
        }
    }
}
