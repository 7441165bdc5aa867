//! Error types shared across swipekit crates.
//!
//! Gesture processing itself never fails; these errors only cover setup and
//! IO: configuration, trace files, and listener bookkeeping.

use std::path::PathBuf;

/// Top-level error type for swipekit operations.
#[derive(Debug, thiserror::Error)]
pub enum SwipeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Trace error: {message}")]
    Trace { message: String },

    #[error("Binding error: {message}")]
    Binding { message: String },

    #[error("Unknown surface: {id}")]
    UnknownSurface { id: usize },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SwipeError.
pub type SwipeResult<T> = Result<T, SwipeError>;

impl SwipeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace {
            message: msg.into(),
        }
    }

    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding {
            message: msg.into(),
        }
    }

    pub fn unknown_surface(id: usize) -> Self {
        Self::UnknownSurface { id }
    }
}
