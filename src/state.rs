//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds read-only configuration: the build table and catalog are
//! static, so requests share nothing mutable.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    #[must_use]
    pub fn response_delay(&self) -> Duration {
        self.config.response_delay
    }

    #[must_use]
    pub fn default_game(&self) -> &str {
        &self.config.default_game
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
