//! Error type shared by the REST helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call against the record service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The service answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// HTTP calls are browser-only; server rendering gets this instead.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status(code) => *code >= 500 || *code == 429,
            Self::Malformed(_) | Self::Unavailable => false,
        }
    }
}
