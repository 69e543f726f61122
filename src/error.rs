// error.rs - Backdrop error types

use thiserror::Error;

/// Errors surfaced by the animator
#[derive(Debug, Error)]
pub enum BackdropError {
    /// The canvas has no 2D context (not mounted, or context creation refused)
    #[error("2D drawing context unavailable")]
    ContextUnavailable,

    /// Config parsed but failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config was not valid JSON for `FieldConfig`
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation requires a running session
    #[error("session is detached")]
    Detached,
}

pub type Result<T> = std::result::Result<T, BackdropError>;
