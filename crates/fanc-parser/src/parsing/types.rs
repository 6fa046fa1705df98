//! Type keyword parsing.

use super::parser::Parser;
use crate::actions::SemanticActions;
use fanc_core::{Result, Type};
use fanc_lexer::TokenKind;

impl<A: SemanticActions> Parser<'_, A> {
    /// Parses a declarable value type: `int`, `byte` or `bool`.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        let ty = match self.peek_kind() {
            Some(TokenKind::Int) => Type::Int,
            Some(TokenKind::Byte) => Type::Byte,
            Some(TokenKind::Bool) => Type::Bool,
            _ => return Err(self.syntax_error()),
        };
        self.advance();
        Ok(ty)
    }

    /// Parses a function return type, which may also be `void`.
    pub(crate) fn parse_return_type(&mut self) -> Result<Type> {
        if self.match_token(TokenKind::Void) {
            Ok(Type::Void)
        } else {
            self.parse_type()
        }
    }

    /// Returns true if the next token starts `[const] Type`.
    pub(crate) fn at_declaration_start(&self) -> bool {
        self.check(TokenKind::Const) || self.peek_kind().is_some_and(TokenKind::is_value_type)
    }
}
