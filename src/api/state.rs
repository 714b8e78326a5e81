//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, SystemConfig};

/// Shared application state.
///
/// Holds the system configuration loaded at startup. Requests may supply
/// their own configuration instead.
#[derive(Clone)]
pub struct AppState {
    config: Arc<SystemConfig>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns a shared handle to the loaded configuration.
    pub fn config(&self) -> Arc<SystemConfig> {
        Arc::clone(&self.config)
    }
}
