//! Core analysis state.

use crate::function_table::FunctionSignature;
use crate::symbol_table::SymbolTable;

/// All state threaded through the semantic actions of one analysis run.
///
/// Construction seeds the library functions; [`AnalysisContext::check_program_end`]
/// is the single point where the finished program is validated as a whole.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    /// Scopes, function signatures and the function being analyzed
    pub(crate) symbols: SymbolTable,
    /// Number of `while` bodies currently open
    pub(crate) loop_depth: usize,
}

impl AnalysisContext {
    /// Creates a new context with only the outer scope and the library functions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn loop_depth(&self) -> usize {
        self.loop_depth
    }

    /// Consumes the context and returns the user-declared function signatures.
    pub fn into_user_functions(self) -> Vec<FunctionSignature> {
        self.symbols.into_user_functions()
    }
}
