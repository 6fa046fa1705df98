//! Parser for the FanC language.
//!
//! This crate drives semantic analysis directly from the token stream: no
//! syntax tree is built. Every completed production is reported to a
//! [`SemanticActions`] implementation, bottom-up and in source order.

pub mod actions;
mod parsing;

pub use actions::{
    Formal, Identifier, LogicalOperator, NumericOperator, RelationalOperator, SemanticActions,
    Typed,
};
pub use parsing::{MAX_NESTING_DEPTH, Parser};

use fanc_core::{Result, Span};
use fanc_lexer::Token;

/// Parses a slice of tokens, reporting every reduction to `actions`.
///
/// # Errors
/// Returns a syntax error for an unparseable token sequence, or the first
/// error returned by any of the actions.
pub fn parse<A: SemanticActions>(tokens: &[(Token, Span)], actions: &mut A) -> Result<()> {
    let mut parser = Parser::new(tokens, actions);
    parser.parse_program()
}
