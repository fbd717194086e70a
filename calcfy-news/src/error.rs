//! Error types for the news module

use thiserror::Error;

/// Errors that can occur in the news module
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Upstream did not answer within the configured deadline
    #[error("Request timed out")]
    Timeout,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NewsError {
    /// True for failures caused by the upstream search API
    pub fn is_upstream(&self) -> bool {
        !matches!(self, NewsError::InvalidConfig(_))
    }

    /// Upstream HTTP status, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            NewsError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NewsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NewsError::Timeout
        } else if e.is_decode() {
            NewsError::ParseError(e.to_string())
        } else {
            NewsError::RequestFailed(e.to_string())
        }
    }
}
