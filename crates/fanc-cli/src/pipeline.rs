//! The check pipeline and its rendering.

use fanc_core::{Error, Span};
use fanc_lexer::{Token, tokenize};
use fanc_semantic::FunctionSignature;
use fanc_utils::{Config, DiagnosticStyle};
use miette::NamedSource;

/// Settings for one check, resolved from the configuration and the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub style: DiagnosticStyle,
    pub summary: bool,
}

impl CheckOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            style: config.diagnostics.style,
            summary: config.output.summary,
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of checking one source, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The program is valid; `stdout` holds the summary (possibly empty).
    Accepted { stdout: String },
    /// The program is invalid; exactly one of the streams holds the diagnostic.
    Rejected { stdout: String, stderr: String },
}

impl CheckOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn stdout(&self) -> &str {
        match self {
            Self::Accepted { stdout } | Self::Rejected { stdout, .. } => stdout,
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            Self::Accepted { .. } => "",
            Self::Rejected { stderr, .. } => stderr,
        }
    }
}

/// Runs lexical analysis on source code.
///
/// # Errors
/// Returns an error if lexical analysis fails.
pub fn lex(source: &str) -> fanc_core::Result<Vec<(Token, Span)>> {
    let tokens = tokenize(source)?;
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses and analyzes tokens, returning the user function signatures.
///
/// # Errors
/// Returns the first syntax or semantic error.
pub fn analyze(tokens: &[(Token, Span)]) -> fanc_core::Result<Vec<FunctionSignature>> {
    fanc_semantic::analyze(tokens)
}

/// Runs the complete pipeline.
///
/// # Errors
/// Returns the first error of any stage.
pub fn check_pipeline(source: &str) -> fanc_core::Result<Vec<FunctionSignature>> {
    let tokens = lex(source)?;
    analyze(&tokens)
}

/// Renders the function signature summary, one per line.
pub fn render_summary(functions: &[FunctionSignature]) -> String {
    functions
        .iter()
        .map(|function| format!("{function}\n"))
        .collect()
}

/// Renders `error` as a graphical report over `source`.
pub fn render_report(error: Error, name: &str, source: &str) -> String {
    let report =
        miette::Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

/// Checks `source` and renders the outcome according to `options`.
///
/// Plain diagnostics go to stdout as a single `line N: message` line; fancy
/// ones go to stderr.
pub fn check_source(source: &str, name: &str, options: CheckOptions) -> CheckOutcome {
    match check_pipeline(source) {
        Ok(functions) => {
            log::info!("{name}: {} functions accepted", functions.len());
            let stdout = if options.summary {
                render_summary(&functions)
            } else {
                String::new()
            };
            CheckOutcome::Accepted { stdout }
        }
        Err(error) => {
            log::info!("{name}: rejected ({:?})", error.kind());
            match options.style {
                DiagnosticStyle::Plain => CheckOutcome::Rejected {
                    stdout: format!("{error}\n"),
                    stderr: String::new(),
                },
                DiagnosticStyle::Fancy => CheckOutcome::Rejected {
                    stdout: String::new(),
                    stderr: render_report(error, name, source),
                },
            }
        }
    }
}
