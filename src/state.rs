//! Application state management
//!
//! Shared state passed to request handlers via Axum's State extractor. The
//! estimation engine itself is stateless; only configuration lives here.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
