//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when foodfinder is run for the first time from a terminal.

use super::FoodFinderConfig;
use crate::api::{DEFAULT_BASE_URL, HttpFoodApi};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::Path;

/// Interactive first-time setup - prompts for the backend location
///
/// Guides the user through creating their configuration:
/// 1. Prompts for the backend API base URL (default: the local backend)
/// 2. Rejects URLs the HTTP client cannot use
/// 3. Saves the configuration to `path`
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup(path: &Path) -> Result<FoodFinderConfig, ConfigError> {
    println!("Welcome to foodfinder! Let's point it at your food search backend.\n");

    let timeout = FoodFinderConfig::default().timeout();
    let api_base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Backend API URL")
        .default(DEFAULT_BASE_URL.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            HttpFoodApi::new(input, timeout)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = FoodFinderConfig {
        api_base_url,
        ..FoodFinderConfig::default()
    };

    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}
