//! Whole-program checks.

use crate::checker::core::AnalysisContext;
use fanc_core::{Error, Result};

impl AnalysisContext {
    /// Checks, once all input is consumed, that `void main()` was declared.
    pub fn check_program_end(&self) -> Result<()> {
        let has_entry_point = self
            .symbols
            .function_signature("main")
            .is_some_and(|main| main.is_entry_point());

        if !has_entry_point {
            return Err(Error::MissingMain);
        }

        log::debug!(
            "program accepted with {} user functions",
            self.symbols.functions().user_declared().len()
        );
        Ok(())
    }
}
