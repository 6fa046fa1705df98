//! Expression type checking.

use crate::checker::core::AnalysisContext;
use fanc_core::{Error, Result, Span, Type};
use fanc_parser::{Identifier, Typed};

/// Largest value a byte literal may hold.
const BYTE_MAX: u64 = 255;

impl AnalysisContext {
    /// Resolves an identifier used as a value.
    pub(crate) fn check_identifier(&self, name: &Identifier) -> Result<Type> {
        self.symbols.lookup_rvalue(&name.name, name.span)
    }

    /// Checks that a `NUM b` literal fits in a byte.
    pub(crate) fn check_byte_literal(&self, literal: &str, span: Span) -> Result<Type> {
        match literal.parse::<u64>() {
            Ok(value) if value <= BYTE_MAX => Ok(Type::Byte),
            _ => Err(Error::ByteOutOfRange {
                line: span.line,
                value: literal.to_string(),
                span,
            }),
        }
    }

    /// Checks `(target) operand`.
    pub(crate) fn check_cast(&self, target: Type, operand: Typed, span: Span) -> Result<Type> {
        if !operand.ty.can_explicit_cast(target) {
            return Err(self.type_mismatch_error(span));
        }
        Ok(target)
    }

    /// Checks `+ - * /`; the result is the wider operand type.
    pub(crate) fn check_numeric_binary(
        &self,
        left: Typed,
        right: Typed,
        span: Span,
    ) -> Result<Type> {
        self.expect_numeral(left.ty, span)?;
        self.expect_numeral(right.ty, span)?;
        Ok(left.ty.widen(right.ty))
    }

    /// Checks a comparison; both sides must be numerals.
    pub(crate) fn check_relational(&self, left: Typed, right: Typed, span: Span) -> Result<Type> {
        self.expect_numeral(left.ty, span)?;
        self.expect_numeral(right.ty, span)?;
        Ok(Type::Bool)
    }

    /// Checks `and` / `or`.
    pub(crate) fn check_logical(&self, left: Typed, right: Typed, span: Span) -> Result<Type> {
        self.expect_implicit_cast(left.ty, Type::Bool, span)?;
        self.expect_implicit_cast(right.ty, Type::Bool, span)?;
        Ok(Type::Bool)
    }

    pub(crate) fn check_not(&self, operand: Typed, span: Span) -> Result<Type> {
        self.expect_implicit_cast(operand.ty, Type::Bool, span)?;
        Ok(Type::Bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(ty: Type) -> Typed {
        Typed::new(ty, Span::new(0, 1, 1))
    }

    #[test]
    fn test_byte_literal_range() {
        let context = AnalysisContext::new();
        let span = Span::new(0, 4, 1);

        assert_eq!(context.check_byte_literal("0", span), Ok(Type::Byte));
        assert_eq!(context.check_byte_literal("255", span), Ok(Type::Byte));

        let err = context.check_byte_literal("256", span).unwrap_err();
        assert_eq!(err.to_string(), "line 1: byte value 256 out of range");

        let huge = "99999999999999999999999";
        let err = context.check_byte_literal(huge, span).unwrap_err();
        assert_eq!(err.kind(), fanc_core::ErrorKind::ByteOutOfRange);
    }

    #[test]
    fn test_numeric_result_widens() {
        let context = AnalysisContext::new();
        let span = Span::new(0, 1, 1);

        let ty = context
            .check_numeric_binary(typed(Type::Byte), typed(Type::Byte), span)
            .unwrap();
        assert_eq!(ty, Type::Byte);

        let ty = context
            .check_numeric_binary(typed(Type::Byte), typed(Type::Int), span)
            .unwrap();
        assert_eq!(ty, Type::Int);

        assert!(context
            .check_numeric_binary(typed(Type::Bool), typed(Type::Int), span)
            .is_err());
    }

    #[test]
    fn test_cast_rules() {
        let context = AnalysisContext::new();
        let span = Span::new(0, 1, 1);

        assert_eq!(context.check_cast(Type::Byte, typed(Type::Int), span), Ok(Type::Byte));
        assert!(context.check_cast(Type::Int, typed(Type::Bool), span).is_err());
        assert!(context.check_cast(Type::Int, typed(Type::String), span).is_err());
    }
}
