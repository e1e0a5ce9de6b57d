//! Application state for the reconciliation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReconciliationConfig;

/// Shared application state.
///
/// Holds the reconciliation settings loaded at startup; every request reads
/// them and none can change them.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ReconciliationConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: ReconciliationConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the reconciliation configuration.
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }
}
