//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use fanc_core::{Error, ErrorKind, Result};
use fanc_semantic::{FunctionSignature, analyze_source};

/// Lexes, parses and analyzes `source`.
pub fn analyze(source: &str) -> Result<Vec<FunctionSignature>> {
    let _ = env_logger::builder().is_test(true).try_init();
    analyze_source(source)
}

/// Helper function to check if source code passes semantic analysis.
pub fn should_pass(source: &str) -> bool {
    analyze(source).is_ok()
}

/// Returns the error reported for `source`, panicking if it is accepted.
pub fn error_of(source: &str) -> Error {
    match analyze(source) {
        Ok(_) => panic!("expected an error for:\n{source}"),
        Err(err) => err,
    }
}

/// Returns the kind of the error reported for `source`.
pub fn error_kind(source: &str) -> ErrorKind {
    error_of(source).kind()
}

/// Wraps statements in a `void main()` body.
pub fn in_main(body: &str) -> String {
    format!("void main() {{\n{body}\n}}")
}
