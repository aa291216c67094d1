//! Config command - read and write configuration values

use crate::{FoodFinderError, cli::ConfigCommands, config::FoodFinderConfig};
use colored::Colorize;

type Result<T> = std::result::Result<T, FoodFinderError>;

/// Execute a config subcommand against the configuration at its default path
///
/// # Errors
/// Returns an error if the key is unknown, the value has the wrong type,
/// or the configuration cannot be saved.
pub fn execute(mut config: FoodFinderConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = apply(&mut config, setting)?;
            config.save()?;
            if !quiet {
                println!("{} Set {} = {}", "✓".green().bold(), key, value.yellow());
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Apply a `key=value` setting, returning the key and its new textual value
///
/// # Errors
/// Returns an error if the setting is malformed, the key is unknown or the
/// value has the wrong type.
pub fn apply(config: &mut FoodFinderConfig, setting: &str) -> Result<(String, String)> {
    let (key, value) = ConfigCommands::split_setting(setting)?;
    config.set_value(key, value)?;
    Ok((key.to_string(), config.get_value(key)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_value() {
        let mut config = FoodFinderConfig::default();
        let (key, value) = apply(&mut config, "timeout_secs=3").unwrap();
        assert_eq!((key.as_str(), value.as_str()), ("timeout_secs", "3"));
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_apply_rejects_unknown_key() {
        let mut config = FoodFinderConfig::default();
        let err = apply(&mut config, "theme=dark").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }
}
