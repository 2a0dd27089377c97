//! Leaf helpers for HTTP handlers.
//!
//! This crate provides:
//! - Content-Type inspection of inbound requests
//! - Lenient pagination parsing from query parameters
//! - Response writers for JSON, HTML, plain text, redirects and empty responses
//!
//! The helpers never route, retry or log on their own. They work against two
//! small seams: [`RequestView`] for reading a request and [`ResponseSink`] for
//! writing a response, so they can sit under any router.
//!
//! ```rust,ignore
//! use axum::http::StatusCode;
//! use httpkit::{write_json, ResponseBuffer};
//!
//! let mut buffer = ResponseBuffer::new();
//! write_json(&mut buffer, StatusCode::OK, Some(&serde_json::json!({"ok": true})))?;
//! ```

pub mod constants;
pub mod content_type;
pub mod error;
pub mod pagination;
pub mod request;
pub mod response;
pub mod sink;

pub use constants::*;
pub use content_type::{
    is_content_type, is_html_request, is_json_request, is_plain_text_request, media_type,
    split_content_type,
};
pub use error::{ErrorKind, ResponseError, ResponseResult};
pub use pagination::{
    parse_pagination, query_int, DefaultPageSize, Paginated, Pagination, PaginationMeta,
    PaginationRequest,
};
pub use request::RequestView;
pub use response::{redirect, write_html, write_json, write_no_content, write_plain_text};
pub use sink::{ResponseBuffer, ResponseSink};
