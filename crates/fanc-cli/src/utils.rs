//! Utility functions shared across the CLI.

use anyhow::Result;
use colored::Colorize;
use fanc_utils::Config;
use std::path::Path;

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Loads the configuration for a check.
///
/// An explicit path must exist; otherwise fanc.toml is searched upward from
/// the current directory and defaults are used when none is found.
///
/// # Errors
/// Returns an error if a configuration file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        log::debug!("using configuration {}", path.display());
        return Config::load(path);
    }

    match Config::find()? {
        Some((config, dir)) => {
            log::debug!("using configuration from {}", dir.display());
            Ok(config)
        }
        None => {
            log::debug!("no fanc.toml found, using defaults");
            Ok(Config::default())
        }
    }
}
