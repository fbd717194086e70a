//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum CalcfyError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcfyError {
    pub fn config(msg: impl Into<String>) -> Self {
        CalcfyError::Config(msg.into())
    }
}

/// Result type alias for CalcFy operations
pub type CalcfyResult<T> = Result<T, CalcfyError>;
