//! Flat, append-only table of function signatures.

use fanc_core::{Type, format_type_list};
use std::collections::HashMap;
use std::fmt;

/// A function's name and prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: Type,
    pub parameter_types: Vec<Type>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, return_type: Type, parameter_types: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameter_types,
        }
    }

    /// Whether this is the `void main()` entry point.
    pub fn is_entry_point(&self) -> bool {
        self.name == "main" && self.return_type == Type::Void && self.parameter_types.is_empty()
    }
}

/// Summary form: `name (INT,BYTE)->VOID`.
impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}->{}",
            self.name,
            format_type_list(&self.parameter_types),
            self.return_type
        )
    }
}

/// Functions visible to every call site, in declaration order.
///
/// Entries are write-once: there is no overloading and no redeclaration.
#[derive(Debug)]
pub struct FunctionTable {
    signatures: Vec<FunctionSignature>,
    index: HashMap<String, usize>,
    builtin_count: usize,
}

impl FunctionTable {
    /// Creates a table holding only the library functions `print` and `printi`.
    pub fn with_builtins() -> Self {
        let mut table = Self {
            signatures: Vec::new(),
            index: HashMap::new(),
            builtin_count: 0,
        };
        table.declare(FunctionSignature::new("print", Type::Void, vec![Type::String]));
        table.declare(FunctionSignature::new("printi", Type::Void, vec![Type::Int]));
        table.builtin_count = table.signatures.len();
        table
    }

    /// Adds a signature.
    ///
    /// # Panics
    /// Panics if a function with the same name is already declared; callers
    /// check [`FunctionTable::contains`] first.
    pub fn declare(&mut self, signature: FunctionSignature) {
        assert!(
            !self.index.contains_key(&signature.name),
            "function '{}' declared twice",
            signature.name
        );
        self.index
            .insert(signature.name.clone(), self.signatures.len());
        self.signatures.push(signature);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.index.get(name).map(|&i| &self.signatures[i])
    }

    /// User-declared functions in declaration order, library functions excluded.
    pub fn user_declared(&self) -> &[FunctionSignature] {
        &self.signatures[self.builtin_count..]
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}
