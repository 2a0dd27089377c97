//! Errors returned by the response writers.
//!
//! Every failure is an encoding failure from the caller's point of view, so
//! each variant reports [`ErrorKind::EncodingFailed`]. A missing HTML payload
//! additionally reports [`ErrorKind::PayloadNil`]. The lower-level fault is
//! kept as the error source for diagnostics.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

/// Coarse failure categories a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Serialization of the payload or the write to the sink failed
    EncodingFailed,
    /// A payload was required but was empty
    PayloadNil,
}

/// Response writer errors.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("failed to encode response: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode response: response payload is nil")]
    PayloadNil,

    #[error("failed to encode response: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl ResponseError {
    /// Primary kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResponseError::PayloadNil => ErrorKind::PayloadNil,
            _ => ErrorKind::EncodingFailed,
        }
    }

    /// Check whether this error belongs to `kind`.
    ///
    /// `PayloadNil` is composed with `EncodingFailed`, so it matches both.
    pub fn is(&self, kind: ErrorKind) -> bool {
        match kind {
            ErrorKind::EncodingFailed => true,
            ErrorKind::PayloadNil => matches!(self, ResponseError::PayloadNil),
        }
    }
}

/// Result type alias
pub type ResponseResult<T> = Result<T, ResponseError>;
