//! Helper functions to reduce code duplication.

use crate::checker::core::AnalysisContext;
use fanc_core::{Error, Result, Span, Type};
use fanc_parser::Identifier;

impl AnalysisContext {
    /// Creates a type mismatch error at `span`.
    pub(crate) fn type_mismatch_error(&self, span: Span) -> Error {
        Error::TypeMismatch {
            line: span.line,
            span,
        }
    }

    /// Creates a redefinition error for `name`.
    pub(crate) fn redefinition_error(&self, name: &Identifier) -> Error {
        Error::Redefinition {
            line: name.span.line,
            name: name.name.clone(),
            span: name.span,
        }
    }

    /// Fails with a type mismatch unless `source` implicitly casts to `target`.
    pub(crate) fn expect_implicit_cast(&self, source: Type, target: Type, span: Span) -> Result<()> {
        if source.can_implicit_cast(target) {
            Ok(())
        } else {
            Err(self.type_mismatch_error(span))
        }
    }

    /// Fails with a type mismatch unless `ty` is `Int` or `Byte`.
    pub(crate) fn expect_numeral(&self, ty: Type, span: Span) -> Result<()> {
        if ty.is_numeral() {
            Ok(())
        } else {
            Err(self.type_mismatch_error(span))
        }
    }
}
