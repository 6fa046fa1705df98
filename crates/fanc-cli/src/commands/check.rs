//! Implementation of the `fanc check` command.

use anyhow::{Context, Result};
use fanc_cli::pipeline::{self, CheckOptions};
use fanc_cli::utils::load_config;
use fanc_utils::DiagnosticStyle;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

/// Executes the `check` command on a file, or on stdin when no file is given.
///
/// # Errors
/// Returns an error if the input or the configuration cannot be read.
pub fn execute(
    file: Option<&Path>,
    config: Option<&Path>,
    style: Option<DiagnosticStyle>,
    no_summary: bool,
) -> Result<ExitCode> {
    let config = load_config(config)?;
    let mut options = CheckOptions::from_config(&config);
    if let Some(style) = style {
        options.style = style;
    }
    if no_summary {
        options.summary = false;
    }

    let (name, source) = match file {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (path.display().to_string(), source)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .with_context(|| "Failed to read standard input")?;
            ("<stdin>".to_string(), source)
        }
    };

    let outcome = pipeline::check_source(&source, &name, options);

    io::stdout()
        .write_all(outcome.stdout().as_bytes())
        .with_context(|| "Failed to write output")?;
    io::stderr()
        .write_all(outcome.stderr().as_bytes())
        .with_context(|| "Failed to write diagnostic")?;

    Ok(if outcome.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
