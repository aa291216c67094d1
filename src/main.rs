//! Foodfinder CLI application entry point
//!
//! Searches a food backend and shows key nutrients per 100g, either in an
//! interactive terminal browser or as plain command output.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! foodfinder
//! foodfinder browse banana
//! foodfinder browse --route /food/171688
//!
//! # Print one page of results
//! foodfinder search "cheddar cheese" --page 2
//!
//! # Print the nutrient card of one food
//! foodfinder show 171688
//!
//! # Point at another backend
//! foodfinder --api-url http://nutrition.local:8000/api search milk
//! foodfinder config set api_base_url=http://nutrition.local:8000/api
//! ```
//!
//! # Configuration
//!
//! On first run, foodfinder prompts for the backend URL. Configuration is
//! stored in the user's config directory (`~/.config/foodfinder/config.toml`
//! on Linux) and each key can be overridden with a `FOODFINDER_*`
//! environment variable.

use colored::Colorize;
use foodfinder::{
    FoodFinderError,
    api::HttpFoodApi,
    cli::{Cli, Commands},
    commands,
    config::FoodFinderConfig,
    logging,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

type Result<T> = std::result::Result<T, FoodFinderError>;

/// Load configuration, parse arguments and dispatch to the command handler
///
/// # Errors
///
/// Returns `FoodFinderError` if configuration loading fails, the backend URL
/// is invalid, or the command itself fails.
fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = FoodFinderConfig::load_or_setup()?;
    let log_path = logging::init(config.log_level.as_deref());

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();
    info!(?command, log = ?log_path, "starting foodfinder");

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    let base_url = cli.api_url.as_deref().unwrap_or(&config.api_base_url);
    let api = HttpFoodApi::new(base_url, config.timeout())?;

    match command {
        Commands::Browse { query, route } => {
            commands::browse(Arc::new(api), query.as_deref(), route)?;
        }
        Commands::Search { query, page } => {
            commands::search(&api, &query, page, quiet)?;
        }
        Commands::Show { fdc_id } => {
            commands::show(&api, fdc_id)?;
        }
        Commands::Config { .. } => unreachable!(),
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
