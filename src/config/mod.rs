//! Configuration module for foodfinder
//!
//! Manages the backend location, request timeout and logging settings.
//! Configuration is stored in the user's config directory and can be
//! overridden per setting with `FOODFINDER_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use crate::api::DEFAULT_BASE_URL;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of environment variables that override the config file
pub const ENV_PREFIX: &str = "FOODFINDER";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FoodFinderConfig {
    /// Base URL of the backend API (e.g. `http://localhost:8000/api`)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Overall timeout for a single request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Log filter directive (e.g. `debug`, `foodfinder=trace`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for FoodFinderConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            quiet: false,
            log_level: None,
        }
    }
}

impl FoodFinderConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("foodfinder").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::default().save_to(&config_path)?;
        }

        Self::load_with(&config_path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from `path`, layered under the given environment source
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the wrong type.
    pub fn load_with(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.try_parsing(true).ignore_empty(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Request timeout as a `Duration`, never zero
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Update a setting from its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values of the wrong type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api_base_url" => {
                if value.trim().is_empty() {
                    return Err(ConfigError::Message("api_base_url cannot be empty".into()));
                }
                self.api_base_url = value.trim().to_string();
            }
            "timeout_secs" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for timeout_secs: '{value}'. Use a whole number of seconds"
                    ))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "log_level" => {
                self.log_level = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    /// Read a setting in its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "api_base_url" => Ok(self.api_base_url.clone()),
            "timeout_secs" => Ok(self.timeout_secs.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "log_level" => Ok(self.log_level.clone().unwrap_or_default()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    fn unknown_key(key: &str) -> ConfigError {
        ConfigError::Message(format!(
            "Unknown configuration key: '{key}'. Available keys: api_base_url, timeout_secs, quiet, log_level"
        ))
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// Setup only prompts when stdin is a terminal; otherwise defaults are saved.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() && std::io::stdin().is_terminal() {
            first_time_setup(&config_path)?;
        }
        Self::load()
    }
}
