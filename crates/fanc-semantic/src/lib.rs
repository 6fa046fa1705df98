//! Semantic analysis for FanC programs.
//!
//! This crate provides the scope-managed symbol table, the function table and
//! the semantic actions that type-check a program while it is being parsed.
//! Analysis stops at the first error.

mod checker;
mod function_table;
mod symbol_table;

pub use checker::AnalysisContext;
pub use function_table::{FunctionSignature, FunctionTable};
pub use symbol_table::{SymbolTable, VariableBinding};

use fanc_core::{Result, Span};
use fanc_lexer::{Token, tokenize};

/// Performs semantic analysis on a token stream.
///
/// # Returns
/// The user-declared function signatures in declaration order, library
/// functions excluded.
///
/// # Errors
/// Returns the first syntax or semantic error found, for example:
/// - Type mismatches
/// - Undefined variables or functions
/// - Redefinitions and const violations
/// - A missing `void main()`
pub fn analyze(tokens: &[(Token, Span)]) -> Result<Vec<FunctionSignature>> {
    let mut context = AnalysisContext::new();
    fanc_parser::parse(tokens, &mut context)?;
    Ok(context.into_user_functions())
}

/// Tokenizes and analyzes FanC source code.
///
/// # Errors
/// Returns the first lexical, syntax or semantic error found.
///
/// # Examples
/// ```
/// use fanc_semantic::analyze_source;
///
/// let source = "int twice(byte b1) { return b1 + b1; }\nvoid main() { printi(twice(3b)); }";
/// let functions = analyze_source(source).unwrap();
/// assert_eq!(functions[0].to_string(), "twice (BYTE)->INT");
/// assert_eq!(functions[1].to_string(), "main ()->VOID");
/// ```
pub fn analyze_source(source: &str) -> Result<Vec<FunctionSignature>> {
    let tokens = tokenize(source)?;
    analyze(&tokens)
}
