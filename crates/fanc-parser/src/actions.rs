//! The reduction-callback protocol between the parser and semantic analysis.
//!
//! The parser never builds a tree. Each time a production (or one of the
//! mid-rule points listed below) is completed it invokes exactly one method
//! of [`SemanticActions`], handing over the synthesized attributes of the
//! production's children. The first `Err` stops parsing and is returned to
//! the caller unchanged.
//!
//! Formal parameter lists and call argument lists are delivered in source
//! order, left to right.

use fanc_core::{Result, Span, Type};

/// An identifier occurrence with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One formal parameter: `[const] Type id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formal {
    pub is_const: bool,
    pub ty: Type,
    pub name: Identifier,
}

/// The synthesized attribute of an expression: its type and extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typed {
    pub ty: Type,
    pub span: Span,
}

impl Typed {
    pub const fn new(ty: Type, span: Span) -> Self {
        Self { ty, span }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// Handlers invoked by the parser, one per completed production.
///
/// Literal productions that can never fail have default implementations.
pub trait SemanticActions {
    /// `RetType ID` has been read; runs before the formals are parsed.
    fn function_header(&mut self, return_type: Type, name: &Identifier) -> Result<()>;

    /// The formal list is complete; runs before the body is parsed.
    fn function_signature(
        &mut self,
        return_type: Type,
        name: &Identifier,
        formals: &[Formal],
    ) -> Result<()>;

    /// The closing brace of a function body has been read.
    fn function_end(&mut self, span: Span) -> Result<()>;

    /// A block, `if` branch or loop body is about to be analyzed.
    fn open_scope(&mut self);

    /// The statements of the innermost open block are complete.
    fn close_scope(&mut self);

    /// A `while` body is about to be analyzed.
    fn open_loop(&mut self);

    /// The innermost `while` body is complete.
    fn close_loop(&mut self);

    /// The condition of an `if` or `while` has been parsed.
    fn condition(&mut self, condition: Typed) -> Result<()>;

    /// `[const] Type id` has been read at the start of a declaration statement.
    fn variable_declaration_start(
        &mut self,
        is_const: bool,
        ty: Type,
        name: &Identifier,
    ) -> Result<()>;

    /// A declaration statement is complete, with or without an initializer.
    fn variable_declaration(
        &mut self,
        is_const: bool,
        ty: Type,
        name: &Identifier,
        initializer: Option<Typed>,
        span: Span,
    ) -> Result<()>;

    /// `id = Exp;`
    fn assignment(&mut self, name: &Identifier, value: Typed, span: Span) -> Result<()>;

    /// `return` with no value, before the `;` is consumed.
    fn return_void(&mut self, span: Span) -> Result<()>;

    /// `return Exp`, before the `;` is consumed.
    fn return_value(&mut self, value: Typed, span: Span) -> Result<()>;

    fn break_statement(&mut self, span: Span) -> Result<()>;

    fn continue_statement(&mut self, span: Span) -> Result<()>;

    /// `id(args)`; returns the type of the call expression.
    fn call(&mut self, callee: &Identifier, arguments: &[Typed], span: Span) -> Result<Type>;

    /// An identifier used as a value.
    fn identifier(&mut self, name: &Identifier) -> Result<Type>;

    /// `NUM b`; `literal` is the digits without the suffix.
    fn byte_literal(&mut self, literal: &str, span: Span) -> Result<Type>;

    /// `(Type) Exp`
    fn cast(&mut self, target: Type, operand: Typed, span: Span) -> Result<Type>;

    fn numeric_binary(
        &mut self,
        left: Typed,
        operator: NumericOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type>;

    fn relational(
        &mut self,
        left: Typed,
        operator: RelationalOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type>;

    fn logical(
        &mut self,
        left: Typed,
        operator: LogicalOperator,
        right: Typed,
        span: Span,
    ) -> Result<Type>;

    /// `not Exp`
    fn not(&mut self, operand: Typed, span: Span) -> Result<Type>;

    /// The whole input has been consumed.
    fn program_end(&mut self) -> Result<()>;

    fn number_literal(&mut self, _literal: &str, _span: Span) -> Type {
        Type::Int
    }

    fn string_literal(&mut self, _span: Span) -> Type {
        Type::String
    }

    fn bool_literal(&mut self, _value: bool, _span: Span) -> Type {
        Type::Bool
    }
}
