//! API client error types
//!
//! Every failure of a backend call collapses into one of these variants.
//! The `Display` text of each variant is the message shown to the user.
//!
//! # Error Types
//!
//! - **`Connection`**: the backend could not be reached at all
//! - **`NotFound`**: a detail lookup for an unknown food (HTTP 404)
//! - **`Api`**: the backend answered with a failure status
//! - **`InvalidResponse`**: a success body that could not be decoded
//! - **`InvalidBaseUrl`**: the configured backend URL is unusable
//! - **`Interrupted`**: the request never produced an answer

use thiserror::Error;

/// Message shown when the backend cannot be reached
pub const CONNECTION_MESSAGE: &str = "Unable to connect to server. Please check if backend is running";

/// Errors returned by [`FoodApi`](super::FoodApi) implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure; the detail is kept for logs only
    #[error("Unable to connect to server. Please check if backend is running")]
    Connection(String),

    /// The requested food does not exist
    #[error("Food not found")]
    NotFound,

    /// Backend responded with a failure status
    #[error("{0}")]
    Api(String),

    /// Backend responded successfully but the body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Configured base URL could not be parsed
    #[error("Invalid backend URL '{0}'")]
    InvalidBaseUrl(String),

    /// The request was abandoned before the backend answered
    #[error("Request failed unexpectedly: {0}")]
    Interrupted(String),
}

impl ApiError {
    /// Build an `Api` error from an optional server message and status code
    #[must_use]
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        match server_message {
            Some(msg) if !msg.trim().is_empty() => Self::Api(msg),
            _ => Self::Api(format!("HTTP Error: {status}")),
        }
    }

    /// Whether the backend was unreachable
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
