//! Symbol table for tracking variables and functions during semantic analysis.

use crate::function_table::{FunctionSignature, FunctionTable};
use fanc_core::{Error, Result, Span, Type};
use std::collections::HashMap;

/// A declared variable or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    /// The name of the variable
    pub name: String,
    /// The declared type of the variable
    pub ty: Type,
    /// Whether the variable was declared `const`
    pub is_const: bool,
}

impl VariableBinding {
    /// Creates a new binding.
    pub fn new(name: impl Into<String>, ty: Type, is_const: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            is_const,
        }
    }
}

type Scope = HashMap<String, VariableBinding>;

/// Symbol table for managing variable scopes and function signatures.
///
/// Variables live in a stack of scopes, innermost last. The outermost scope
/// is pushed on construction, never holds variables and is never popped.
/// Functions live in a separate flat [`FunctionTable`].
#[derive(Debug)]
pub struct SymbolTable {
    /// Stack of scopes, with the current scope at the top
    scopes: Vec<Scope>,
    functions: FunctionTable,
    /// Signature of the function whose body is being analyzed
    current_function: Option<FunctionSignature>,
}

impl SymbolTable {
    /// Creates a new symbol table with the outer scope and the library functions.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
            functions: FunctionTable::with_builtins(),
            current_function: None,
        }
    }

    /// Enters a new scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Exits the current scope, discarding its bindings.
    ///
    /// # Panics
    /// Panics if attempting to exit the outer scope.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() <= 1 {
            panic!("Cannot exit the outer scope");
        }
        self.scopes.pop();
    }

    /// Returns the number of open blocks (0 = outer scope only).
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Returns true if no visible variable is named `name`.
    ///
    /// Every scope on the stack is searched, so a local may not reuse a name
    /// that is visible from an enclosing block. Functions are not consulted.
    pub fn declarable(&self, name: &str) -> bool {
        self.lookup(name).is_none()
    }

    /// Defines a new variable in the current scope.
    ///
    /// The caller must have checked [`SymbolTable::declarable`].
    pub fn declare_variable(&mut self, name: &str, ty: Type, is_const: bool) {
        debug_assert!(self.declarable(name), "'{name}' is already visible");
        let binding = VariableBinding::new(name, ty, is_const);
        self.scopes
            .last_mut()
            .expect("outer scope is never popped")
            .insert(name.to_string(), binding);
    }

    /// Looks up a variable by name, searching from the current scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&VariableBinding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Resolves a variable used as a value.
    ///
    /// # Errors
    /// Returns `UndefinedIdentifier` if no scope holds the name.
    pub fn lookup_rvalue(&self, name: &str, span: Span) -> Result<Type> {
        self.lookup(name)
            .map(|binding| binding.ty)
            .ok_or_else(|| Error::UndefinedIdentifier {
                line: span.line,
                name: name.to_string(),
                span,
            })
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns true if the visible binding for `name` is const.
    pub fn is_const(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|binding| binding.is_const)
    }

    pub fn variable_type(&self, name: &str) -> Option<Type> {
        self.lookup(name).map(|binding| binding.ty)
    }

    /// Adds a function signature to the flat function table.
    ///
    /// The caller must have checked [`SymbolTable::callable`].
    pub fn declare_function(&mut self, signature: FunctionSignature) {
        self.functions.declare(signature);
    }

    /// Returns true if a function named `name` has been declared.
    pub fn callable(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn function_signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    pub fn return_type(&self, name: &str) -> Option<Type> {
        self.functions.get(name).map(|f| f.return_type)
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Marks `signature` as the function whose body is being analyzed.
    pub fn enter_function(&mut self, signature: FunctionSignature) {
        self.current_function = Some(signature);
    }

    pub fn leave_function(&mut self) {
        self.current_function = None;
    }

    pub fn current_function(&self) -> Option<&FunctionSignature> {
        self.current_function.as_ref()
    }

    /// Consumes the table, returning the user-declared signatures in order.
    pub fn into_user_functions(self) -> Vec<FunctionSignature> {
        self.functions.user_declared().to_vec()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
