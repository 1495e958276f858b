//! HTTP error types

use thiserror::Error;

/// HTTP errors that can occur during requests
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response; the numeric code is the entire error payload
    #[error("HTTP status {0}")]
    Status(u16),
    /// No response was obtained (DNS, refused or dropped connection)
    #[error("Connection error: {0}")]
    Transport(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// A 2xx body that was expected to be JSON was not
    #[error("Decode error: {0}")]
    Decode(String),
    /// The request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The call does not satisfy the descriptor's contract
    #[error("Invalid request: {0}")]
    Request(String),
    /// Url error
    #[error(transparent)]
    Url(#[from] campus::api_url::Error),
    /// The caller's cancellation token fired before the response arrived
    #[error("Request cancelled")]
    Cancelled,
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Transport(err.to_string())
        } else if err.is_decode() {
            HttpError::Decode(err.to_string())
        } else if err.is_builder() {
            HttpError::Build(err.to_string())
        } else if let Some(status) = err.status() {
            HttpError::Status(status.as_u16())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

impl From<campus::endpoint::Error> for HttpError {
    fn from(err: campus::endpoint::Error) -> Self {
        match err {
            campus::endpoint::Error::Url(err) => HttpError::Url(err),
            other => HttpError::Request(other.to_string()),
        }
    }
}
