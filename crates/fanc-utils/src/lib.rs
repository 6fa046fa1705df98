//! Shared utilities for the FanC tools.

pub mod config;

pub use config::{CONFIG_FILE_NAME, Config, DiagnosticStyle, DiagnosticsConfig, OutputConfig};
