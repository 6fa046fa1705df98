//! Wiring of the parser's reduction callbacks to the checks.

use crate::checker::core::AnalysisContext;
use fanc_core::{Result, Span, Type};
use fanc_parser::{
    Formal, Identifier, LogicalOperator, NumericOperator, RelationalOperator, SemanticActions,
    Typed,
};

impl SemanticActions for AnalysisContext {
    fn function_header(&mut self, _return_type: Type, name: &Identifier) -> Result<()> {
        self.check_function_header(name)
    }

    fn function_signature(
        &mut self,
        return_type: Type,
        name: &Identifier,
        formals: &[Formal],
    ) -> Result<()> {
        self.check_function_signature(return_type, name, formals)
    }

    fn function_end(&mut self, span: Span) -> Result<()> {
        self.finish_function(span);
        Ok(())
    }

    fn open_scope(&mut self) {
        self.enter_block();
    }

    fn close_scope(&mut self) {
        self.leave_block();
    }

    fn open_loop(&mut self) {
        self.enter_loop();
    }

    fn close_loop(&mut self) {
        self.leave_loop();
    }

    fn condition(&mut self, condition: Typed) -> Result<()> {
        self.check_condition(condition)
    }

    fn variable_declaration_start(
        &mut self,
        _is_const: bool,
        _ty: Type,
        name: &Identifier,
    ) -> Result<()> {
        self.check_declaration_start(name)
    }

    fn variable_declaration(
        &mut self,
        is_const: bool,
        ty: Type,
        name: &Identifier,
        initializer: Option<Typed>,
        span: Span,
    ) -> Result<()> {
        self.check_declaration(is_const, ty, name, initializer, span)
    }

    fn assignment(&mut self, name: &Identifier, value: Typed, span: Span) -> Result<()> {
        self.check_assignment(name, value, span)
    }

    fn return_void(&mut self, span: Span) -> Result<()> {
        self.check_return_void(span)
    }

    fn return_value(&mut self, value: Typed, span: Span) -> Result<()> {
        self.check_return_value(value, span)
    }

    fn break_statement(&mut self, span: Span) -> Result<()> {
        self.check_break(span)
    }

    fn continue_statement(&mut self, span: Span) -> Result<()> {
        self.check_continue(span)
    }

    fn call(&mut self, callee: &Identifier, arguments: &[Typed], span: Span) -> Result<Type> {
        self.check_call(callee, arguments, span)
    }

    fn identifier(&mut self, name: &Identifier) -> Result<Type> {
        self.check_identifier(name)
    }

    fn byte_literal(&mut self, literal: &str, span: Span) -> Result<Type> {
        self.check_byte_literal(literal, span)
    }

    fn cast(&mut self, target: Type, operand: Typed, span: Span) -> Result<Type> {
        self.check_cast(target, operand, span)
    }

    fn numeric_binary(
        &mut self,
        left: Typed,
        _operator: NumericOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type> {
        self.check_numeric_binary(left, right, span)
    }

    fn relational(
        &mut self,
        left: Typed,
        _operator: RelationalOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type> {
        self.check_relational(left, right, span)
    }

    fn logical(
        &mut self,
        left: Typed,
        _operator: LogicalOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type> {
        self.check_logical(left, right, span)
    }

    fn not(&mut self, operand: Typed, span: Span) -> Result<Type> {
        self.check_not(operand, span)
    }

    fn program_end(&mut self) -> Result<()> {
        self.check_program_end()
    }
}
