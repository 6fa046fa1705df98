//! Statement type checking.

use crate::checker::core::AnalysisContext;
use fanc_core::{Error, Result, Span, Type};
use fanc_parser::{Identifier, Typed};

impl AnalysisContext {
    /// Checks that a declared name is not already visible.
    pub(crate) fn check_declaration_start(&self, name: &Identifier) -> Result<()> {
        if !self.symbols.declarable(&name.name) {
            return Err(self.redefinition_error(name));
        }
        Ok(())
    }

    /// Checks a complete declaration and binds the variable in the current scope.
    pub(crate) fn check_declaration(
        &mut self,
        is_const: bool,
        ty: Type,
        name: &Identifier,
        initializer: Option<Typed>,
        span: Span,
    ) -> Result<()> {
        match initializer {
            Some(value) => self.expect_implicit_cast(value.ty, ty, span)?,
            None if is_const => {
                return Err(Error::ConstWithoutInitializer {
                    line: span.line,
                    name: name.name.clone(),
                    span,
                });
            }
            None => {}
        }

        self.symbols.declare_variable(&name.name, ty, is_const);
        Ok(())
    }

    /// Checks `name = value;`.
    pub(crate) fn check_assignment(
        &self,
        name: &Identifier,
        value: Typed,
        span: Span,
    ) -> Result<()> {
        let binding = self
            .symbols
            .lookup(&name.name)
            .ok_or_else(|| Error::UndefinedIdentifier {
                line: span.line,
                name: name.name.clone(),
                span: name.span,
            })?;

        if binding.is_const {
            return Err(Error::ConstReassignment {
                line: span.line,
                name: name.name.clone(),
                span: name.span,
            });
        }

        self.expect_implicit_cast(value.ty, binding.ty, span)
    }

    /// Return type of the function being analyzed; `return` outside one never parses.
    fn current_return_type(&self, span: Span) -> Result<Type> {
        self.symbols
            .current_function()
            .map(|function| function.return_type)
            .ok_or_else(|| self.type_mismatch_error(span))
    }

    /// Checks `return;`, legal only in a void function.
    pub(crate) fn check_return_void(&self, span: Span) -> Result<()> {
        if self.current_return_type(span)? != Type::Void {
            return Err(self.type_mismatch_error(span));
        }
        Ok(())
    }

    /// Checks `return value;`.
    ///
    /// Void functions may not return a value, and a void call is never a value.
    pub(crate) fn check_return_value(&self, value: Typed, span: Span) -> Result<()> {
        let return_type = self.current_return_type(span)?;
        if return_type.is_void() || value.ty.is_void() {
            return Err(self.type_mismatch_error(span));
        }
        self.expect_implicit_cast(value.ty, return_type, span)
    }

    pub(crate) fn check_break(&self, span: Span) -> Result<()> {
        if self.loop_depth == 0 {
            return Err(Error::UnexpectedBreak {
                line: span.line,
                span,
            });
        }
        Ok(())
    }

    pub(crate) fn check_continue(&self, span: Span) -> Result<()> {
        if self.loop_depth == 0 {
            return Err(Error::UnexpectedContinue {
                line: span.line,
                span,
            });
        }
        Ok(())
    }
}
