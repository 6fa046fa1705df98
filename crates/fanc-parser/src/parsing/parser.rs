//! Core parser structure and helper methods.

use crate::actions::{Identifier, SemanticActions};
use fanc_core::{Error, Result, Span};
use fanc_lexer::{Token, TokenKind};

/// Deepest nesting of statements and prefix or parenthesized expressions
/// accepted before the input is rejected as a syntax error.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser for FanC source code.
///
/// Owns no analysis state of its own; everything it learns is passed on to
/// the borrowed [`SemanticActions`].
pub struct Parser<'a, A: SemanticActions> {
    tokens: &'a [(Token, Span)],
    current: usize,
    depth: usize,
    pub(crate) actions: &'a mut A,
}

impl<'a, A: SemanticActions> Parser<'a, A> {
    /// Creates a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)], actions: &'a mut A) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
            actions,
        }
    }

    /// Parses a complete program: any number of function declarations.
    ///
    /// # Errors
    /// Returns the first syntax or semantic error.
    pub fn parse_program(&mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_function()?;
        }

        log::trace!("end of input after {} tokens", self.tokens.len());
        self.actions.program_end()
    }

    // ==================== Helper Methods ====================

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_ahead(0)
    }

    pub(crate) fn peek_text(&self) -> &str {
        self.tokens
            .get(self.current)
            .map_or("", |(token, _)| token.text.as_str())
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<TokenKind> {
        self.tokens
            .get(self.current + offset)
            .map(|(token, _)| token.kind)
    }

    pub(crate) fn check_ahead(&self, offset: usize, kind: TokenKind) -> bool {
        self.peek_ahead(offset) == Some(kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Span> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.syntax_error())
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Identifier> {
        if self.check(TokenKind::Identifier) {
            let identifier = Identifier::new(self.peek_text(), self.current_span());
            self.advance();
            Ok(identifier)
        } else {
            Err(self.syntax_error())
        }
    }

    /// Span of the current token, or an empty span just past the last token.
    pub(crate) fn current_span(&self) -> Span {
        match self.tokens.get(self.current) {
            Some((_, span)) => *span,
            None => self
                .tokens
                .last()
                .map_or(Span::new(0, 0, 1), |(_, span)| {
                    Span::new(span.end, span.end, span.line)
                }),
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails with a syntax error at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(crate) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            log::debug!("nesting deeper than {MAX_NESTING_DEPTH} levels");
            return Err(self.syntax_error());
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Builds a syntax error pointing at the current token.
    pub(crate) fn syntax_error(&self) -> Error {
        let span = self.current_span();
        log::debug!(
            "syntax error at line {} near '{}'",
            span.line,
            self.peek_text()
        );
        Error::Syntax {
            line: span.line,
            span,
        }
    }
}
