//! Statement parsing.

use super::parser::Parser;
use crate::actions::{SemanticActions, Typed};
use fanc_core::Result;
use fanc_lexer::TokenKind;

impl<A: SemanticActions> Parser<'_, A> {
    /// Parses one or more statements, up to (not including) a closing brace.
    pub(crate) fn parse_statement_list(&mut self) -> Result<()> {
        // A block must contain at least one statement.
        self.parse_statement()?;
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    /// Parses a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<()> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> Result<()> {
        match self.peek_kind() {
            Some(TokenKind::LeftBrace) => self.parse_block(),
            Some(TokenKind::If) => self.parse_if(),
            Some(TokenKind::While) => self.parse_while(),
            Some(TokenKind::Return) => self.parse_return(),
            Some(TokenKind::Break) => {
                let start = self.current_span();
                self.advance();
                let end = self.expect(TokenKind::Semicolon)?;
                self.actions.break_statement(start.merge(end))
            }
            Some(TokenKind::Continue) => {
                let start = self.current_span();
                self.advance();
                let end = self.expect(TokenKind::Semicolon)?;
                self.actions.continue_statement(start.merge(end))
            }
            Some(TokenKind::Identifier) if self.check_ahead(1, TokenKind::Assign) => {
                self.parse_assignment()
            }
            Some(TokenKind::Identifier) if self.check_ahead(1, TokenKind::LeftParen) => {
                self.parse_call()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(())
            }
            _ if self.at_declaration_start() => self.parse_variable_declaration(),
            _ => Err(self.syntax_error()),
        }
    }

    /// Parses `{ Statements }` in a fresh scope.
    fn parse_block(&mut self) -> Result<()> {
        self.expect(TokenKind::LeftBrace)?;
        self.actions.open_scope();
        self.parse_statement_list()?;
        self.actions.close_scope();
        self.expect(TokenKind::RightBrace)?;
        Ok(())
    }

    /// Parses the statement of an `if`/`else` branch or loop body in its own scope.
    fn parse_branch(&mut self) -> Result<()> {
        self.actions.open_scope();
        self.parse_statement()?;
        self.actions.close_scope();
        Ok(())
    }

    /// Parses `( Exp )` and validates it as a condition.
    fn parse_condition(&mut self) -> Result<()> {
        self.expect(TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.actions.condition(condition)?;
        self.expect(TokenKind::RightParen)?;
        Ok(())
    }

    fn parse_if(&mut self) -> Result<()> {
        self.expect(TokenKind::If)?;
        self.parse_condition()?;
        self.parse_branch()?;

        // `else` binds to the nearest unmatched `if`.
        if self.match_token(TokenKind::Else) {
            self.parse_branch()?;
        }
        Ok(())
    }

    fn parse_while(&mut self) -> Result<()> {
        self.expect(TokenKind::While)?;
        self.parse_condition()?;
        self.actions.open_loop();
        self.parse_branch()?;
        self.actions.close_loop();
        Ok(())
    }

    fn parse_return(&mut self) -> Result<()> {
        let start = self.expect(TokenKind::Return)?;

        if self.check(TokenKind::Semicolon) {
            self.actions.return_void(start.merge(self.current_span()))?;
        } else {
            let value = self.parse_expression()?;
            self.actions.return_value(value, start.merge(value.span))?;
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// Parses `ID = Exp ;`.
    fn parse_assignment(&mut self) -> Result<()> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        let end = self.expect(TokenKind::Semicolon)?;
        self.actions
            .assignment(&name, value, name.span.merge(end))
    }

    /// Parses `[const] Type ID [= Exp] ;`.
    fn parse_variable_declaration(&mut self) -> Result<()> {
        let start = self.current_span();
        let is_const = self.match_token(TokenKind::Const);
        let ty = self.parse_type()?;
        let name = self.expect_identifier()?;
        self.actions
            .variable_declaration_start(is_const, ty, &name)?;

        let initializer: Option<Typed> = if self.match_token(TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        let end = self.expect(TokenKind::Semicolon)?;

        self.actions
            .variable_declaration(is_const, ty, &name, initializer, start.merge(end))
    }
}
