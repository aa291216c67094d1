//! Foodfinder - search foods and browse their key nutrients
//!
//! This library provides a client for a food search backend (USDA
//! FoodData Central data behind a small REST API), the controllers that
//! drive the search and detail screens, and a terminal UI on top of them.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod format;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod route;
pub mod ui;
pub mod worker;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FoodFinderError {
    /// Backend client error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// A backend request failed; carries the message shown to the user
    #[error("{0}")]
    Request(String),
    /// Invalid route or food identifier
    #[error("Route error: {0}")]
    Route(#[from] route::RouteError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
