//! Catalog handlers.
//!
//! The catalog is synthetic: item `n` exists for every `1 <= n <= catalog_size`.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    routing::{delete, get},
    Router,
};
use httpkit::{redirect, write_json, write_no_content, Pagination, ResponseBuffer};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Catalog item
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

impl Item {
    fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("Item {}", id),
        }
    }
}

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/:id", delete(delete_item))
        .route("/catalog", get(catalog))
}

/// List one page of the catalog
pub async fn list_items(
    State(state): State<AppState>,
    Pagination(pagination): Pagination,
) -> AppResult<ResponseBuffer> {
    let total = state.config.catalog_size;
    tracing::debug!(
        page = pagination.page(),
        per_page = pagination.per_page(),
        "listing catalog items"
    );

    let first = pagination.offset().saturating_add(1);
    let last = pagination
        .offset()
        .saturating_add(pagination.limit())
        .min(total);
    let items: Vec<Item> = (first..=last).map(Item::new).collect();

    let mut buffer = ResponseBuffer::new();
    write_json(
        &mut buffer,
        StatusCode::OK,
        Some(&pagination.paginate(items, total)),
    )?;
    Ok(buffer)
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<ResponseBuffer> {
    if id == 0 || id > state.config.catalog_size {
        return Err(AppError::NotFound);
    }

    tracing::debug!(id, "deleting catalog item");

    let mut buffer = ResponseBuffer::new();
    write_no_content(&mut buffer)?;
    Ok(buffer)
}

/// Legacy catalog URL, permanently moved to `items`
pub async fn catalog(request: Request) -> AppResult<ResponseBuffer> {
    let mut buffer = ResponseBuffer::new();
    redirect(
        &mut buffer,
        &request,
        StatusCode::PERMANENT_REDIRECT,
        "items",
    )?;
    Ok(buffer)
}
