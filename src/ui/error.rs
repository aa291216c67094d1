//! UI error types

use thiserror::Error;

/// Errors that can occur while running the TUI
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal could not be prepared or restored
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
