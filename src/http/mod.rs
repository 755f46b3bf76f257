//! HTTP request tooling - snippet generation and mock responses

pub mod mock;
pub mod request;
pub mod snippet;

use thiserror::Error;

/// Errors produced while assembling a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("invalid url: {0} (expected http:// or https:// with a host)")]
    InvalidUrl(String),

    #[error("invalid header: '{0}' (expected 'Name: value')")]
    InvalidHeader(String),

    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

impl HttpError {
    /// Stable error code surfaced in result items
    pub fn code(&self) -> &'static str {
        match self {
            HttpError::InvalidUrl(_) => "INVALID_URL",
            HttpError::InvalidHeader(_) => "INVALID_HEADER",
            HttpError::UnknownMethod(_) => "UNKNOWN_METHOD",
        }
    }
}
