//! Function declaration and call checking.

use crate::checker::core::AnalysisContext;
use crate::function_table::FunctionSignature;
use fanc_core::{Error, Result, Span, Type};
use fanc_parser::{Formal, Identifier, Typed};
use std::collections::HashSet;

impl AnalysisContext {
    /// Checks a function name as soon as it is read.
    ///
    /// Functions cannot be overloaded or redeclared, library functions included.
    pub(crate) fn check_function_header(&mut self, name: &Identifier) -> Result<()> {
        if self.symbols.callable(&name.name) || !self.symbols.declarable(&name.name) {
            return Err(self.redefinition_error(name));
        }
        Ok(())
    }

    /// Validates the formals, declares the function and opens its parameter scope.
    pub(crate) fn check_function_signature(
        &mut self,
        return_type: Type,
        name: &Identifier,
        formals: &[Formal],
    ) -> Result<()> {
        self.check_formals(name, formals)?;

        let parameter_types = formals.iter().map(|formal| formal.ty).collect();
        let signature = FunctionSignature::new(name.name.clone(), return_type, parameter_types);
        log::debug!("declared function {signature}");

        self.symbols.declare_function(signature.clone());
        self.symbols.enter_function(signature);
        self.symbols.push_scope();

        for formal in formals {
            self.symbols
                .declare_variable(&formal.name.name, formal.ty, formal.is_const);
        }

        Ok(())
    }

    /// Checks formal names, left to right.
    ///
    /// A formal may not reuse the function's own name, a visible variable's
    /// name, or the name of an earlier formal.
    fn check_formals(&self, function: &Identifier, formals: &[Formal]) -> Result<()> {
        let mut seen = HashSet::new();

        for formal in formals {
            let name = formal.name.name.as_str();
            if name == function.name || !self.symbols.declarable(name) || !seen.insert(name) {
                return Err(self.redefinition_error(&formal.name));
            }
        }

        Ok(())
    }

    /// Closes the parameter scope at the end of a function body.
    pub(crate) fn finish_function(&mut self, span: Span) {
        self.symbols.pop_scope();
        if let Some(function) = self.symbols.current_function() {
            log::debug!("finished body of '{}' at line {}", function.name, span.line);
        }
        self.symbols.leave_function();
    }

    /// Checks a call against the callee's prototype and returns its result type.
    pub(crate) fn check_call(
        &mut self,
        callee: &Identifier,
        arguments: &[Typed],
        span: Span,
    ) -> Result<Type> {
        let Some(signature) = self.symbols.function_signature(&callee.name) else {
            return Err(Error::UndefinedFunction {
                line: span.line,
                name: callee.name.clone(),
                span,
            });
        };

        let matches_prototype = arguments.len() == signature.parameter_types.len()
            && arguments
                .iter()
                .zip(&signature.parameter_types)
                .all(|(argument, &parameter)| argument.ty.can_implicit_cast(parameter));

        if !matches_prototype {
            return Err(Error::PrototypeMismatch {
                line: span.line,
                name: callee.name.clone(),
                expected: signature.parameter_types.clone(),
                span,
            });
        }

        Ok(signature.return_type)
    }
}
