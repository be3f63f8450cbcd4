//! Error types for feed operations.

use thiserror::Error;

/// Errors that can occur while fetching token data.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("failed to parse response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::RequestFailed(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::ParseError(err.to_string())
    }
}

impl FeedError {
    /// Returns true if this error is transient and likely to succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FeedError::RequestFailed(_) | FeedError::HttpStatus(_)
        )
    }
}
