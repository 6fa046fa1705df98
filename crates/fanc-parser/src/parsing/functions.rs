//! Function declaration parsing.

use super::parser::Parser;
use crate::actions::{Formal, SemanticActions};
use fanc_core::Result;
use fanc_lexer::TokenKind;

impl<A: SemanticActions> Parser<'_, A> {
    /// Parses `RetType ID ( Formals ) { Statements }`.
    pub(crate) fn parse_function(&mut self) -> Result<()> {
        let return_type = self.parse_return_type()?;
        let name = self.expect_identifier()?;
        log::trace!("function header '{}'", name.name);
        self.actions.function_header(return_type, &name)?;

        self.expect(TokenKind::LeftParen)?;
        let formals = self.parse_formals()?;
        self.actions
            .function_signature(return_type, &name, &formals)?;
        self.expect(TokenKind::RightParen)?;

        self.expect(TokenKind::LeftBrace)?;
        self.parse_statement_list()?;
        let end = self.expect(TokenKind::RightBrace)?;

        self.actions.function_end(end)
    }

    /// Parses a possibly empty, comma separated formal list, in source order.
    fn parse_formals(&mut self) -> Result<Vec<Formal>> {
        let mut formals = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(formals);
        }

        loop {
            formals.push(self.parse_formal()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(formals)
    }

    /// Parses `[const] Type ID`.
    fn parse_formal(&mut self) -> Result<Formal> {
        let is_const = self.match_token(TokenKind::Const);
        let ty = self.parse_type()?;
        let name = self.expect_identifier()?;
        Ok(Formal { is_const, ty, name })
    }
}
