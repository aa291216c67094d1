//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for foodfinder using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive food browser (default)
//! - **search**: Print one page of search results
//! - **show**: Print the nutrient card of a single food
//! - **config**: Read and write configuration values
//!
//! # Examples
//!
//! ```
//! use foodfinder::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["foodfinder", "search", "banana", "--page", "2"]);
//! match cli.get_command() {
//!     Commands::Search { query, page } => assert_eq!((query.as_str(), page), ("banana", 2)),
//!     _ => unreachable!(),
//! }
//! ```

use crate::FoodFinderError;
use crate::models::FdcId;
use crate::route::Route;
use clap::{Parser, Subcommand};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., timeout_secs=5)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., api_base_url)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl ConfigCommands {
    /// Split a `key=value` setting
    ///
    /// # Errors
    ///
    /// Returns `FoodFinderError::InvalidInput` if there is no `=` or the key is empty.
    pub fn split_setting(setting: &str) -> Result<(&str, &str), FoodFinderError> {
        match setting.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
            _ => Err(FoodFinderError::InvalidInput(
                "Invalid format. Use: foodfinder config set key=value".into(),
            )),
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "foodfinder")]
#[command(about = "Search foods and browse their key nutrients", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Backend API base URL (overrides config and environment)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive food browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Query to search for immediately
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Screen to start on, e.g. `/` or `/food/171688`
        #[arg(long = "route", value_name = "PATH", value_parser = clap::value_parser!(Route))]
        route: Option<Route>,
    },

    /// Search foods and print one page of results
    #[command(visible_alias = "s")]
    Search {
        /// Food name to search for
        #[arg(value_name = "QUERY")]
        query: String,

        /// Page to print (1-based)
        #[arg(short = 'p', long = "page", default_value_t = 1,
              value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Print the key nutrients of one food
    Show {
        /// FoodData Central identifier
        #[arg(value_name = "FDC_ID", value_parser = clap::value_parser!(FdcId))]
        fdc_id: FdcId,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            route: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["foodfinder"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: None,
                route: None
            }
        );
        assert!(!cli.quiet);
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_browse_with_route() {
        let cli = Cli::parse_from(["foodfinder", "browse", "--route", "/food/171688"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: None,
                route: Some(Route::food(FdcId::from(171_688)))
            }
        );
    }

    #[test]
    fn test_browse_rejects_unknown_route() {
        assert!(Cli::try_parse_from(["foodfinder", "browse", "--route", "/recipes"]).is_err());
    }

    #[test]
    fn test_search_page_defaults_to_one() {
        let cli = Cli::parse_from(["foodfinder", "search", "apple"]);
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                query: "apple".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn test_search_rejects_page_zero() {
        assert!(Cli::try_parse_from(["foodfinder", "search", "apple", "--page", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "foodfinder",
            "show",
            "42",
            "-q",
            "--api-url",
            "http://backend:8000/api",
        ]);
        assert!(cli.quiet);
        assert_eq!(cli.api_url.as_deref(), Some("http://backend:8000/api"));
        assert_eq!(
            cli.get_command(),
            Commands::Show {
                fdc_id: FdcId::from(42)
            }
        );
    }

    #[test]
    fn test_split_setting() {
        assert_eq!(
            ConfigCommands::split_setting("timeout_secs = 5").unwrap(),
            ("timeout_secs", "5")
        );
        assert_eq!(
            ConfigCommands::split_setting("log_level=").unwrap(),
            ("log_level", "")
        );
        assert!(ConfigCommands::split_setting("quiet").is_err());
        assert!(ConfigCommands::split_setting("=true").is_err());
    }
}
