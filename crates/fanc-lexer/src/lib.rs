//! Lexical analysis for the FanC language.
//!
//! This crate provides tokenization of FanC source code into a stream of
//! tokens, each tagged with its byte span and source line.

mod token;

pub use token::{Token, TokenKind};

use fanc_core::{Error, Result, Span};
use logos::Logos;

/// Tokenizes FanC source code into a vector of tokens.
///
/// # Errors
/// Returns a lexical error at the first character that starts no token.
///
/// # Examples
/// ```
/// use fanc_lexer::tokenize;
///
/// let tokens = tokenize("int x = 42;").unwrap();
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>> {
    let lines = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let line = lines.line_of(range.start);
        let span = Span::new(range.start, range.end, line);

        let kind = result.map_err(|()| Error::Lexical { line, span })?;
        let text = lexer.slice().to_string();

        tokens.push((Token { kind, text }, span));
    }

    log::trace!("tokenized {} tokens over {} lines", tokens.len(), lines.count());
    Ok(tokens)
}

/// Maps byte offsets to 1-based line numbers.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    fn count(&self) -> usize {
        self.starts.len()
    }
}
