//! Demo gateway library.
//!
//! An axum application whose handlers answer through the `httpkit` helpers:
//! every response is written into a `ResponseBuffer` and returned as-is.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use tracing::info;

use crate::config::GatewayConfig;
use crate::error::{AppError, AppResult};
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> AppResult<()> {
    let addr = config.server_addr();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
