//! Gateway configuration.

use std::env;

// =============================================================================
// Defaults
// =============================================================================

/// Default server host address
pub const DEFAULT_GATEWAY_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_GATEWAY_PORT: u16 = 3000;

/// Default number of items per page for list endpoints
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Number of items in the demo catalog
pub const DEFAULT_CATALOG_SIZE: u64 = 95;

/// Largest request body the echo endpoint will buffer
pub const MAX_ECHO_BODY_BYTES: usize = 64 * 1024;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Page size used when a list request has no valid `per_page`
    pub default_page_size: i64,
    /// Number of items served by the catalog endpoints
    pub catalog_size: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| DEFAULT_GATEWAY_HOST.to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_GATEWAY_PORT),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            catalog_size: env::var("CATALOG_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CATALOG_SIZE),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GATEWAY_HOST.to_string(),
            port: DEFAULT_GATEWAY_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
            catalog_size: DEFAULT_CATALOG_SIZE,
        }
    }
}
