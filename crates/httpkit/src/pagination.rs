//! Pagination types for list endpoints.
//!
//! Parsing is lenient: a missing, malformed or non-positive `page` or
//! `per_page` falls back to its default instead of failing the request.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::Serialize;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_QUERY_PARAM, PER_PAGE_QUERY_PARAM,
};
use crate::request::RequestView;

/// Page number and page size for one list request.
///
/// `limit` and `offset` are derived on every call so they always agree with
/// the stored page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    page: u64,
    per_page: u64,
}

impl PaginationRequest {
    /// Create a pagination request, clamping both values to at least 1
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// First page with `default_limit` items, or the fallback size when
    /// `default_limit` is not positive
    pub fn defaults(default_limit: i64) -> Self {
        let per_page = u64::try_from(default_limit)
            .ok()
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Maximum number of items to return
    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Wrap one page of items together with the total item count
    pub fn paginate<T>(&self, data: Vec<T>, total: u64) -> Paginated<T> {
        Paginated::new(data, self.page, self.per_page, total)
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::defaults(0)
    }
}

/// Parse pagination from the `page` and `per_page` query parameters.
///
/// Without a request the defaults are returned, which is handy for
/// programmatic calls.
pub fn parse_pagination<R>(request: Option<&R>, default_limit: i64) -> PaginationRequest
where
    R: RequestView + ?Sized,
{
    let mut pagination = PaginationRequest::defaults(default_limit);

    let Some(request) = request else {
        return pagination;
    };

    if let Ok(page) = u64::try_from(query_int(request, PAGE_QUERY_PARAM)) {
        if page > 0 {
            pagination.page = page;
        }
    }

    if let Ok(per_page) = u64::try_from(query_int(request, PER_PAGE_QUERY_PARAM)) {
        if per_page > 0 {
            pagination.per_page = per_page;
        }
    }

    pagination
}

/// Query parameter `key` as a base-10 integer.
///
/// Returns 0 when the parameter is missing, empty or not an integer, so a
/// literal `0` cannot be told apart from "not specified".
pub fn query_int<R: RequestView + ?Sized>(request: &R, key: &str) -> i64 {
    request
        .query_param(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Default page size picked up by the [`Pagination`] extractor.
///
/// Insert it as a request extension (for example with
/// `axum::Extension(DefaultPageSize(25))`) to override the fallback.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPageSize(pub i64);

/// Extractor running [`parse_pagination`] on the request's query string.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PaginationRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let default_limit = parts
            .extensions
            .get::<DefaultPageSize>()
            .map(|size| size.0)
            .unwrap_or(0);

        Ok(Pagination(parse_pagination(Some(&*parts), default_limit)))
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}
