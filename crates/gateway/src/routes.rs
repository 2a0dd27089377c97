//! Route configuration.

use axum::{Extension, Router};
use httpkit::DefaultPageSize;
use tower_http::trace::TraceLayer;

use crate::handlers::{catalog_routes, echo_routes, site_routes};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let default_page_size = DefaultPageSize(state.config.default_page_size);

    Router::new()
        .merge(site_routes())
        .merge(catalog_routes())
        .merge(echo_routes())
        // Picked up by the `Pagination` extractor
        .layer(Extension(default_page_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
