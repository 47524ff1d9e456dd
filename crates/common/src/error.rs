//! Error types shared across Levitate crates.
//!
//! The levitation math itself is total and never fails. These errors only
//! cover the edges: loading profiles and app config, parsing pointer
//! scenarios, and tool I/O.

use std::path::PathBuf;

/// Top-level error type for Levitate operations.
#[derive(Debug, thiserror::Error)]
pub enum LevitateError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Scenario error: {message}")]
    Scenario { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using LevitateError.
pub type LevitateResult<T> = Result<T, LevitateError>;

impl LevitateError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn scenario(msg: impl Into<String>) -> Self {
        Self::Scenario {
            message: msg.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
