//! Command-line interface for the FanC semantic checker.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fanc_utils::DiagnosticStyle;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fanc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a FanC program and print its function signatures
    #[command(visible_alias = "c")]
    Check {
        /// Source file to check; standard input when omitted
        file: Option<PathBuf>,

        /// Configuration file to use instead of searching for fanc.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Diagnostic rendering style
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Do not print the function signature summary
        #[arg(long)]
        no_summary: bool,
    },

    /// Write a default fanc.toml into the current directory
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Plain,
    Fancy,
}

impl From<StyleArg> for DiagnosticStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Plain => Self::Plain,
            StyleArg::Fancy => Self::Fancy,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.try_init().ok();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            file,
            config,
            style,
            no_summary,
        } => commands::check::execute(
            file.as_deref(),
            config.as_deref(),
            style.map(Into::into),
            no_summary,
        ),
        Commands::Init => {
            commands::init::execute()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
