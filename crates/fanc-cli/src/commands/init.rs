//! Implementation of the `fanc init` command.

use anyhow::Result;
use fanc_cli::utils::print_status;
use fanc_utils::{CONFIG_FILE_NAME, Config};
use std::path::Path;

/// Writes a default fanc.toml into the current directory.
///
/// # Errors
/// Returns an error if fanc.toml already exists or cannot be written.
pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} already exists in current directory");
    }

    Config::default().save(CONFIG_FILE_NAME)?;
    print_status("Created", CONFIG_FILE_NAME);

    Ok(())
}
