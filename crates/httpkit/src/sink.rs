//! Response sinks.
//!
//! A sink receives headers, then a status, then body bytes. Once the status
//! is written the headers are committed: later header changes and repeated
//! status writes have no effect.

use std::io;

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Destination for an HTTP response.
pub trait ResponseSink {
    /// Set (replace) a header value
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Commit the status line and headers
    fn write_status(&mut self, status: StatusCode);

    /// Append body bytes, committing a `200 OK` first if nothing was committed yet
    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()>;
}

/// In-memory sink that can be turned into an axum [`Response`].
///
/// Handlers write into a fresh buffer and return it; the buffer also serves
/// as a recorder in tests.
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, `200 OK` when nothing was committed
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Whether the status line has been committed
    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, if present and visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseSink for ResponseBuffer {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.is_committed() {
            tracing::warn!(header = %name, "header set after status was written; ignoring");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if let Some(committed) = self.status {
            tracing::warn!(
                committed = committed.as_u16(),
                attempted = status.as_u16(),
                "superfluous write_status call"
            );
            return;
        }
        self.status = Some(status);
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        if !self.is_committed() {
            self.write_status(StatusCode::OK);
        }
        self.body.extend_from_slice(chunk);
        Ok(())
    }
}

impl IntoResponse for ResponseBuffer {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::{CONTENT_TYPE, LOCATION};

    use super::*;

    #[test]
    fn test_new_buffer_is_uncommitted_ok() {
        let buffer = ResponseBuffer::new();
        assert!(!buffer.is_committed());
        assert_eq!(buffer.status(), StatusCode::OK);
        assert!(buffer.body().is_empty());
    }

    #[test]
    fn test_second_status_is_ignored() {
        let mut buffer = ResponseBuffer::new();
        buffer.write_status(StatusCode::CREATED);
        buffer.write_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(buffer.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_headers_freeze_after_commit() {
        let mut buffer = ResponseBuffer::new();
        buffer.set_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        buffer.write_status(StatusCode::OK);
        buffer.set_header(LOCATION, HeaderValue::from_static("/elsewhere"));

        assert_eq!(buffer.header("content-type"), Some("text/plain"));
        assert_eq!(buffer.header("location"), None);
    }

    #[test]
    fn test_body_write_commits_ok() {
        let mut buffer = ResponseBuffer::new();
        buffer.write_body(b"hello").unwrap();
        buffer.write_body(b" world").unwrap();

        assert!(buffer.is_committed());
        assert_eq!(buffer.status(), StatusCode::OK);
        assert_eq!(buffer.body(), b"hello world");
    }

    #[test]
    fn test_into_response_carries_everything() {
        let mut buffer = ResponseBuffer::new();
        buffer.set_header(LOCATION, HeaderValue::from_static("/next"));
        buffer.write_status(StatusCode::SEE_OTHER);

        let response = buffer.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/next");
    }
}
