//! Diagnostic taxonomy for the FanC front end.
//!
//! Analysis stops at the first error, so a run produces at most one of these.

use crate::types::format_type_list;
use crate::{Span, Type};
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Fieldless classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    UndefinedIdentifier,
    UndefinedFunction,
    DuplicateOrConflictingDefinition,
    TypeMismatch,
    PrototypeMismatch,
    ConstReassignment,
    ConstWithoutInitializer,
    ByteOutOfRange,
    UnexpectedBreak,
    UnexpectedContinue,
    MissingMain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Main error type for the FanC front end.
///
/// The `Display` form is the classic single-line report, e.g.
/// `line 3: type mismatch`.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("line {line}: lexical error")]
    #[diagnostic(code(fanc::lexer))]
    Lexical {
        line: usize,
        #[label("unrecognized input")]
        span: Span,
    },

    #[error("line {line}: syntax error")]
    #[diagnostic(code(fanc::parser))]
    Syntax {
        line: usize,
        #[label("unexpected token")]
        span: Span,
    },

    #[error("line {line}: variable {name} is not defined")]
    #[diagnostic(code(fanc::semantic::undefined_identifier))]
    UndefinedIdentifier {
        line: usize,
        name: String,
        #[label("no visible variable with this name")]
        span: Span,
    },

    #[error("line {line}: function {name} is not defined")]
    #[diagnostic(code(fanc::semantic::undefined_function))]
    UndefinedFunction {
        line: usize,
        name: String,
        #[label("called here")]
        span: Span,
    },

    #[error("line {line}: identifier {name} is already defined")]
    #[diagnostic(code(fanc::semantic::redefinition))]
    Redefinition {
        line: usize,
        name: String,
        #[label("conflicting definition")]
        span: Span,
    },

    #[error("line {line}: type mismatch")]
    #[diagnostic(code(fanc::semantic::type_mismatch))]
    TypeMismatch {
        line: usize,
        #[label("mismatched type")]
        span: Span,
    },

    #[error(
        "line {line}: prototype mismatch, function {name} expects arguments {}",
        format_type_list(.expected)
    )]
    #[diagnostic(code(fanc::semantic::prototype_mismatch))]
    PrototypeMismatch {
        line: usize,
        name: String,
        expected: Vec<Type>,
        #[label("arguments do not match the declaration")]
        span: Span,
    },

    #[error("line {line}: trying to assign to a const variable")]
    #[diagnostic(code(fanc::semantic::const_reassignment))]
    ConstReassignment {
        line: usize,
        name: String,
        #[label("variable is declared const")]
        span: Span,
    },

    #[error("line {line}: const variables must be initialized")]
    #[diagnostic(code(fanc::semantic::const_without_initializer))]
    ConstWithoutInitializer {
        line: usize,
        name: String,
        #[label("missing initializer")]
        span: Span,
    },

    #[error("line {line}: byte value {value} out of range")]
    #[diagnostic(
        code(fanc::semantic::byte_out_of_range),
        help("byte literals must lie in 0..=255")
    )]
    ByteOutOfRange {
        line: usize,
        value: String,
        #[label("literal too large")]
        span: Span,
    },

    #[error("line {line}: unexpected break statement")]
    #[diagnostic(code(fanc::semantic::unexpected_break))]
    UnexpectedBreak {
        line: usize,
        #[label("not inside a loop")]
        span: Span,
    },

    #[error("line {line}: unexpected continue statement")]
    #[diagnostic(code(fanc::semantic::unexpected_continue))]
    UnexpectedContinue {
        line: usize,
        #[label("not inside a loop")]
        span: Span,
    },

    #[error("Program has no 'void main()' function")]
    #[diagnostic(code(fanc::semantic::missing_main))]
    MissingMain,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexical { .. } => ErrorKind::LexicalError,
            Error::Syntax { .. } => ErrorKind::SyntaxError,
            Error::UndefinedIdentifier { .. } => ErrorKind::UndefinedIdentifier,
            Error::UndefinedFunction { .. } => ErrorKind::UndefinedFunction,
            Error::Redefinition { .. } => ErrorKind::DuplicateOrConflictingDefinition,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::PrototypeMismatch { .. } => ErrorKind::PrototypeMismatch,
            Error::ConstReassignment { .. } => ErrorKind::ConstReassignment,
            Error::ConstWithoutInitializer { .. } => ErrorKind::ConstWithoutInitializer,
            Error::ByteOutOfRange { .. } => ErrorKind::ByteOutOfRange,
            Error::UnexpectedBreak { .. } => ErrorKind::UnexpectedBreak,
            Error::UnexpectedContinue { .. } => ErrorKind::UnexpectedContinue,
            Error::MissingMain => ErrorKind::MissingMain,
        }
    }

    /// Returns the span the error points at, if it has one.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lexical { span, .. }
            | Error::Syntax { span, .. }
            | Error::UndefinedIdentifier { span, .. }
            | Error::UndefinedFunction { span, .. }
            | Error::Redefinition { span, .. }
            | Error::TypeMismatch { span, .. }
            | Error::PrototypeMismatch { span, .. }
            | Error::ConstReassignment { span, .. }
            | Error::ConstWithoutInitializer { span, .. }
            | Error::ByteOutOfRange { span, .. }
            | Error::UnexpectedBreak { span, .. }
            | Error::UnexpectedContinue { span, .. } => Some(*span),
            Error::MissingMain => None,
        }
    }

    /// Returns the source line reported for this error.
    ///
    /// `MissingMain` is detected after the whole input and has no line.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lexical { line, .. }
            | Error::Syntax { line, .. }
            | Error::UndefinedIdentifier { line, .. }
            | Error::UndefinedFunction { line, .. }
            | Error::Redefinition { line, .. }
            | Error::TypeMismatch { line, .. }
            | Error::PrototypeMismatch { line, .. }
            | Error::ConstReassignment { line, .. }
            | Error::ConstWithoutInitializer { line, .. }
            | Error::ByteOutOfRange { line, .. }
            | Error::UnexpectedBreak { line, .. }
            | Error::UnexpectedContinue { line, .. } => Some(*line),
            Error::MissingMain => None,
        }
    }
}

/// Result type alias using the FanC Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: usize) -> Span {
        Span::new(0, 1, line)
    }

    #[test]
    fn test_plain_messages() {
        let err = Error::TypeMismatch {
            line: 3,
            span: span(3),
        };
        assert_eq!(err.to_string(), "line 3: type mismatch");

        let err = Error::UndefinedIdentifier {
            line: 7,
            name: "x".to_string(),
            span: span(7),
        };
        assert_eq!(err.to_string(), "line 7: variable x is not defined");

        assert_eq!(
            Error::MissingMain.to_string(),
            "Program has no 'void main()' function"
        );
    }

    #[test]
    fn test_prototype_mismatch_lists_parameters() {
        let err = Error::PrototypeMismatch {
            line: 4,
            name: "f".to_string(),
            expected: vec![Type::Int, Type::Byte],
            span: span(4),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"line 4: prototype mismatch, function f expects arguments (INT,BYTE)"
        );
    }

    #[test]
    fn test_kind_and_line() {
        let err = Error::ByteOutOfRange {
            line: 2,
            value: "256".to_string(),
            span: span(2),
        };
        assert_eq!(err.kind(), ErrorKind::ByteOutOfRange);
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.span(), Some(span(2)));

        assert_eq!(Error::MissingMain.kind(), ErrorKind::MissingMain);
        assert_eq!(Error::MissingMain.line(), None);
    }
}
