//! A `SemanticActions` implementation that records every callback.

use fanc_core::{Error, Result, Span, Type};
use fanc_lexer::tokenize;
use fanc_parser::{
    Formal, Identifier, LogicalOperator, NumericOperator, RelationalOperator, SemanticActions,
    Typed, parse,
};

/// Records callbacks as short strings and types everything permissively.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
    /// When set, `identifier` fails for this name with an undefined-identifier error.
    pub reject_identifier: Option<String>,
}

impl Recorder {
    fn push(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
    }
}

impl SemanticActions for Recorder {
    fn function_header(&mut self, return_type: Type, name: &Identifier) -> Result<()> {
        self.push(format!("header {return_type} {}", name.name));
        Ok(())
    }

    fn function_signature(
        &mut self,
        _return_type: Type,
        name: &Identifier,
        formals: &[Formal],
    ) -> Result<()> {
        let formals: Vec<_> = formals
            .iter()
            .map(|f| format!("{}{}:{}", if f.is_const { "const " } else { "" }, f.name.name, f.ty))
            .collect();
        self.push(format!("signature {}({})", name.name, formals.join(",")));
        Ok(())
    }

    fn function_end(&mut self, _span: Span) -> Result<()> {
        self.push("end function");
        Ok(())
    }

    fn open_scope(&mut self) {
        self.push("open scope");
    }

    fn close_scope(&mut self) {
        self.push("close scope");
    }

    fn open_loop(&mut self) {
        self.push("open loop");
    }

    fn close_loop(&mut self) {
        self.push("close loop");
    }

    fn condition(&mut self, condition: Typed) -> Result<()> {
        self.push(format!("condition {}", condition.ty));
        Ok(())
    }

    fn variable_declaration_start(
        &mut self,
        is_const: bool,
        ty: Type,
        name: &Identifier,
    ) -> Result<()> {
        self.push(format!("declare start {is_const} {ty} {}", name.name));
        Ok(())
    }

    fn variable_declaration(
        &mut self,
        _is_const: bool,
        _ty: Type,
        name: &Identifier,
        initializer: Option<Typed>,
        _span: Span,
    ) -> Result<()> {
        match initializer {
            Some(init) => self.push(format!("declare {} = {}", name.name, init.ty)),
            None => self.push(format!("declare {}", name.name)),
        }
        Ok(())
    }

    fn assignment(&mut self, name: &Identifier, value: Typed, _span: Span) -> Result<()> {
        self.push(format!("assign {} = {}", name.name, value.ty));
        Ok(())
    }

    fn return_void(&mut self, _span: Span) -> Result<()> {
        self.push("return");
        Ok(())
    }

    fn return_value(&mut self, value: Typed, _span: Span) -> Result<()> {
        self.push(format!("return {}", value.ty));
        Ok(())
    }

    fn break_statement(&mut self, _span: Span) -> Result<()> {
        self.push("break");
        Ok(())
    }

    fn continue_statement(&mut self, _span: Span) -> Result<()> {
        self.push("continue");
        Ok(())
    }

    fn call(&mut self, callee: &Identifier, arguments: &[Typed], _span: Span) -> Result<Type> {
        let arguments: Vec<_> = arguments.iter().map(|a| a.ty.to_string()).collect();
        self.push(format!("call {}({})", callee.name, arguments.join(",")));
        Ok(Type::Void)
    }

    fn identifier(&mut self, name: &Identifier) -> Result<Type> {
        if self.reject_identifier.as_deref() == Some(name.name.as_str()) {
            return Err(Error::UndefinedIdentifier {
                line: name.span.line,
                name: name.name.clone(),
                span: name.span,
            });
        }
        self.push(format!("id {}", name.name));
        Ok(Type::Int)
    }

    fn byte_literal(&mut self, literal: &str, _span: Span) -> Result<Type> {
        self.push(format!("byte {literal}"));
        Ok(Type::Byte)
    }

    fn cast(&mut self, target: Type, operand: Typed, _span: Span) -> Result<Type> {
        self.push(format!("cast {} -> {target}", operand.ty));
        Ok(target)
    }

    fn numeric_binary(
        &mut self,
        left: Typed,
        operator: NumericOperator,
        right: Typed,
        _span: Span,
    ) -> Result<Type> {
        self.push(format!("{operator:?} {} {}", left.ty, right.ty));
        Ok(Type::Int)
    }

    fn relational(
        &mut self,
        _left: Typed,
        operator: RelationalOperator,
        _right: Typed,
        _span: Span,
    ) -> Result<Type> {
        self.push(format!("{operator:?}"));
        Ok(Type::Bool)
    }

    fn logical(
        &mut self,
        _left: Typed,
        operator: LogicalOperator,
        _right: Typed,
        _span: Span,
    ) -> Result<Type> {
        self.push(format!("{operator:?}"));
        Ok(Type::Bool)
    }

    fn not(&mut self, _operand: Typed, _span: Span) -> Result<Type> {
        self.push("not");
        Ok(Type::Bool)
    }

    fn program_end(&mut self) -> Result<()> {
        self.push("end program");
        Ok(())
    }
}

/// Parses `source` with a fresh recorder and returns the recorded events.
pub fn record(source: &str) -> Result<Vec<String>> {
    let tokens = tokenize(source)?;
    let mut recorder = Recorder::default();
    parse(&tokens, &mut recorder)?;
    Ok(recorder.events)
}
