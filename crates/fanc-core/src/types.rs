//! The closed set of FanC value types and the two cast relations.

use std::fmt;

/// Type of a FanC value or function result.
///
/// `Void` only ever appears as a function return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Byte,
    Bool,
    String,
    Void,
}

impl Type {
    /// Every type, in declaration order.
    pub const ALL: [Type; 5] = [Type::Int, Type::Byte, Type::Bool, Type::String, Type::Void];

    /// Returns true for the types that take part in arithmetic and comparisons.
    #[must_use]
    pub const fn is_numeral(self) -> bool {
        matches!(self, Type::Int | Type::Byte)
    }

    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Type::Void)
    }

    /// Whether a value of this type may be used where `target` is expected
    /// without a written cast.
    ///
    /// Only identity and `Byte -> Int` widening are implicit.
    #[must_use]
    pub fn can_implicit_cast(self, target: Type) -> bool {
        self == target || (self == Type::Byte && target == Type::Int)
    }

    /// Whether `(target) value` is a legal cast expression for a value of this type.
    #[must_use]
    pub fn can_explicit_cast(self, target: Type) -> bool {
        self == target || (self.is_numeral() && target.is_numeral())
    }

    /// Result type of a numeric binary operator applied to `self` and `other`.
    ///
    /// Both operands must already be numerals.
    #[must_use]
    pub fn widen(self, other: Type) -> Type {
        debug_assert!(self.is_numeral() && other.is_numeral());
        if self == Type::Int || other == Type::Int {
            Type::Int
        } else {
            Type::Byte
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "INT"),
            Type::Byte => write!(f, "BYTE"),
            Type::Bool => write!(f, "BOOL"),
            Type::String => write!(f, "STRING"),
            Type::Void => write!(f, "VOID"),
        }
    }
}

/// Renders a parameter list the way diagnostics and summaries show it: `(INT,BYTE)`.
#[must_use]
pub fn format_type_list(types: &[Type]) -> String {
    let inner = types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("({inner})")
}
