//! Commerce backend error types.

use thiserror::Error;

/// Errors that can occur talking to the commerce backend.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The request could not complete at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed.
    #[error("failed to parse backend response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend returned a non-success status; the message is the
    /// best-effort extraction from the error body.
    #[error("{0}")]
    Rejected(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl CommerceError {
    /// Whether this failure carried a message from the backend, as opposed
    /// to a transport- or parse-level failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
