//! Expression parsing with operator precedence.
//!
//! From loosest to tightest: `or`, `and`, relational operators, `+ -`,
//! `* /`, then the prefix forms `not` and `(Type)` casts. All binary
//! operators associate to the left.

use super::parser::Parser;
use crate::actions::{
    Identifier, LogicalOperator, NumericOperator, RelationalOperator, SemanticActions, Typed,
};
use fanc_core::Result;
use fanc_lexer::TokenKind;

impl<A: SemanticActions> Parser<'_, A> {
    /// Parses an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Typed> {
        self.parse_or()
    }

    /// Parses logical OR expression.
    fn parse_or(&mut self) -> Result<Typed> {
        let mut expr = self.parse_and()?;

        while self.match_token(TokenKind::Or) {
            let right = self.parse_and()?;
            let span = expr.span.merge(right.span);
            let ty = self
                .actions
                .logical(expr, LogicalOperator::Or, right, span)?;
            expr = Typed::new(ty, span);
        }

        Ok(expr)
    }

    /// Parses logical AND expression.
    fn parse_and(&mut self) -> Result<Typed> {
        let mut expr = self.parse_relational()?;

        while self.match_token(TokenKind::And) {
            let right = self.parse_relational()?;
            let span = expr.span.merge(right.span);
            let ty = self
                .actions
                .logical(expr, LogicalOperator::And, right, span)?;
            expr = Typed::new(ty, span);
        }

        Ok(expr)
    }

    /// Parses relational expression (==, !=, <, <=, >, >=).
    fn parse_relational(&mut self) -> Result<Typed> {
        let mut expr = self.parse_additive()?;

        while let Some(operator) = self.match_relational_operator() {
            let right = self.parse_additive()?;
            let span = expr.span.merge(right.span);
            let ty = self.actions.relational(expr, operator, right, span)?;
            expr = Typed::new(ty, span);
        }

        Ok(expr)
    }

    fn match_relational_operator(&mut self) -> Option<RelationalOperator> {
        let operator = match self.peek_kind()? {
            TokenKind::EqualEqual => RelationalOperator::Equal,
            TokenKind::BangEqual => RelationalOperator::NotEqual,
            TokenKind::Less => RelationalOperator::Less,
            TokenKind::LessEqual => RelationalOperator::LessEqual,
            TokenKind::Greater => RelationalOperator::Greater,
            TokenKind::GreaterEqual => RelationalOperator::GreaterEqual,
            _ => return None,
        };
        self.advance();
        Some(operator)
    }

    /// Parses additive expression (+, -).
    fn parse_additive(&mut self) -> Result<Typed> {
        let mut expr = self.parse_multiplicative()?;

        loop {
            let operator = if self.match_token(TokenKind::Plus) {
                NumericOperator::Add
            } else if self.match_token(TokenKind::Minus) {
                NumericOperator::Subtract
            } else {
                break;
            };

            let right = self.parse_multiplicative()?;
            let span = expr.span.merge(right.span);
            let ty = self.actions.numeric_binary(expr, operator, right, span)?;
            expr = Typed::new(ty, span);
        }

        Ok(expr)
    }

    /// Parses multiplicative expression (*, /).
    fn parse_multiplicative(&mut self) -> Result<Typed> {
        let mut expr = self.parse_unary()?;

        loop {
            let operator = if self.match_token(TokenKind::Star) {
                NumericOperator::Multiply
            } else if self.match_token(TokenKind::Slash) {
                NumericOperator::Divide
            } else {
                break;
            };

            let right = self.parse_unary()?;
            let span = expr.span.merge(right.span);
            let ty = self.actions.numeric_binary(expr, operator, right, span)?;
            expr = Typed::new(ty, span);
        }

        Ok(expr)
    }

    /// Parses `not Exp` and `(Type) Exp`.
    fn parse_unary(&mut self) -> Result<Typed> {
        self.nested(Self::parse_prefix)
    }

    fn parse_prefix(&mut self) -> Result<Typed> {
        if self.check(TokenKind::Not) {
            let start = self.current_span();
            self.advance();
            let operand = self.parse_unary()?;
            let span = start.merge(operand.span);
            let ty = self.actions.not(operand, span)?;
            return Ok(Typed::new(ty, span));
        }

        let is_cast = self.check(TokenKind::LeftParen)
            && self
                .peek_ahead(1)
                .is_some_and(TokenKind::is_value_type);
        if is_cast {
            let start = self.current_span();
            self.advance();
            let target = self.parse_type()?;
            self.expect(TokenKind::RightParen)?;
            let operand = self.parse_unary()?;
            let span = start.merge(operand.span);
            let ty = self.actions.cast(target, operand, span)?;
            return Ok(Typed::new(ty, span));
        }

        self.parse_primary()
    }

    /// Parses primary expressions (literals, identifiers, calls, grouping).
    fn parse_primary(&mut self) -> Result<Typed> {
        let span = self.current_span();

        match self.peek_kind() {
            Some(TokenKind::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                let end = self.expect(TokenKind::RightParen)?;
                Ok(Typed::new(inner.ty, span.merge(end)))
            }
            Some(TokenKind::Identifier) if self.check_ahead(1, TokenKind::LeftParen) => {
                self.parse_call()
            }
            Some(TokenKind::Identifier) => {
                let name = self.expect_identifier()?;
                let ty = self.actions.identifier(&name)?;
                Ok(Typed::new(ty, name.span))
            }
            Some(TokenKind::String) => {
                self.advance();
                Ok(Typed::new(self.actions.string_literal(span), span))
            }
            Some(TokenKind::Number) => {
                let literal = self.peek_text().to_string();
                self.advance();

                if self.check(TokenKind::ByteSuffix) {
                    let span = span.merge(self.current_span());
                    self.advance();
                    let ty = self.actions.byte_literal(&literal, span)?;
                    Ok(Typed::new(ty, span))
                } else {
                    Ok(Typed::new(self.actions.number_literal(&literal, span), span))
                }
            }
            Some(TokenKind::True) => {
                self.advance();
                Ok(Typed::new(self.actions.bool_literal(true, span), span))
            }
            Some(TokenKind::False) => {
                self.advance();
                Ok(Typed::new(self.actions.bool_literal(false, span), span))
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// Parses `ID ( [Exp {, Exp}] )` with arguments in source order.
    pub(crate) fn parse_call(&mut self) -> Result<Typed> {
        let callee: Identifier = self.expect_identifier()?;
        self.expect(TokenKind::LeftParen)?;

        let mut arguments = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let end = self.expect(TokenKind::RightParen)?;
        let span = callee.span.merge(end);
        let ty = self.actions.call(&callee, &arguments, span)?;
        Ok(Typed::new(ty, span))
    }
}
