//! Block, loop and condition handling.

use crate::checker::core::AnalysisContext;
use fanc_core::{Result, Type};
use fanc_parser::Typed;

impl AnalysisContext {
    /// Opens a scope for a block, branch or loop body.
    pub(crate) fn enter_block(&mut self) {
        self.symbols.push_scope();
        log::trace!("entered scope at depth {}", self.symbols.depth());
    }

    pub(crate) fn leave_block(&mut self) {
        log::trace!("leaving scope at depth {}", self.symbols.depth());
        self.symbols.pop_scope();
    }

    pub(crate) fn enter_loop(&mut self) {
        self.loop_depth += 1;
        log::debug!("entered loop, depth {}", self.loop_depth);
    }

    pub(crate) fn leave_loop(&mut self) {
        debug_assert!(self.loop_depth > 0, "loop exited more often than entered");
        self.loop_depth = self.loop_depth.saturating_sub(1);
        log::debug!("left loop, depth {}", self.loop_depth);
    }

    /// Checks an `if` or `while` condition.
    pub(crate) fn check_condition(&self, condition: Typed) -> Result<()> {
        self.expect_implicit_cast(condition.ty, Type::Bool, condition.span)
    }
}
