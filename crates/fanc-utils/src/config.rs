//! Configuration file handling for FanC checks.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`Config::find`].
pub const CONFIG_FILE_NAME: &str = "fanc.toml";

/// Represents the fanc.toml configuration file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diagnostics: DiagnosticsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub style: DiagnosticStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the function signature summary after a successful check
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { summary: true }
    }
}

/// How a diagnostic is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStyle {
    /// One `line N: message` line on stdout
    #[default]
    Plain,
    /// A graphical report with the offending source on stderr
    Fancy,
}

impl fmt::Display for DiagnosticStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Fancy => write!(f, "fancy"),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a fanc.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))
    }

    /// Saves configuration to a fanc.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds fanc.toml starting from the current directory.
    ///
    /// Returns `None` when no directory up to the root holds one.
    ///
    /// # Errors
    /// Returns an error if the current directory is unavailable or a found
    /// file cannot be loaded.
    pub fn find() -> Result<Option<(Self, PathBuf)>> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Finds fanc.toml in `start` or any of its parent directories.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be loaded.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<Option<(Self, PathBuf)>> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok(Some((config, current_dir)));
            }

            if !current_dir.pop() {
                return Ok(None);
            }
        }
    }
}
