//! Root, health and documentation pages.

use axum::{http::StatusCode, routing::get, Router};
use httpkit::{write_html, write_json, write_plain_text, ResponseBuffer};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Gateway</title></head>
<body>
<h1>Gateway</h1>
<ul>
<li><code>GET /items?page=&amp;per_page=</code> paginated catalog</li>
<li><code>DELETE /items/:id</code> remove an item</li>
<li><code>POST /echo</code> echo a JSON or plain-text body</li>
<li><code>GET /catalog</code> redirects to <code>/items</code></li>
</ul>
</body>
</html>
"#;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Create site routes.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/docs", get(docs))
}

/// Root endpoint
pub async fn root() -> AppResult<ResponseBuffer> {
    let mut buffer = ResponseBuffer::new();
    write_plain_text(&mut buffer, StatusCode::OK, "Welcome to the gateway")?;
    Ok(buffer)
}

/// Health check endpoint
pub async fn health() -> AppResult<ResponseBuffer> {
    let mut buffer = ResponseBuffer::new();
    write_json(
        &mut buffer,
        StatusCode::OK,
        Some(&HealthResponse { status: "healthy" }),
    )?;
    Ok(buffer)
}

/// Endpoint overview as HTML
pub async fn docs() -> AppResult<ResponseBuffer> {
    let mut buffer = ResponseBuffer::new();
    write_html(&mut buffer, StatusCode::OK, DOCS_HTML)?;
    Ok(buffer)
}
