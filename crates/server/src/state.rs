//! # Application State
//!
//! The shared state is deliberately thin: just the configuration. Provider
//! clients are built per request by the factory so that a missing API key
//! surfaces as a request-time configuration error instead of failing server
//! startup, and so a request can override the model.

use crate::config::AppConfig;
use std::sync::Arc;
use tahrir::{ProviderConfig, ProviderKind};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// The resolved configuration for one provider. Absent entries resolve
    /// to an empty config, which the factory rejects as a missing key.
    pub fn provider_config(&self, kind: ProviderKind) -> ProviderConfig {
        self.config
            .providers
            .get(kind.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}
