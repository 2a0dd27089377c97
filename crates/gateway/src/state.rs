//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
