//! Tests for the order and content of parser callbacks.

mod common;
use common::{Recorder, record};
use fanc_core::ErrorKind;
use fanc_lexer::tokenize;
use fanc_parser::{MAX_NESTING_DEPTH, parse};

fn body_events(source: &str) -> Vec<String> {
    let events = record(source).unwrap();
    // Drop header, signature, end function and end program.
    events[2..events.len() - 2].to_vec()
}

#[test]
fn test_empty_program_only_ends() {
    assert_eq!(record("").unwrap(), vec!["end program"]);
    assert_eq!(record("// nothing here\n").unwrap(), vec!["end program"]);
}

#[test]
fn test_function_callbacks() {
    let source = r#"
        int f(int x, const byte y) {
            return x;
        }
    "#;
    assert_eq!(
        record(source).unwrap(),
        vec![
            "header INT f",
            "signature f(x:INT,const y:BYTE)",
            "id x",
            "return INT",
            "end function",
            "end program",
        ]
    );
}

#[test]
fn test_loop_and_branch_scopes() {
    let source = r#"
        void main() {
            int i = 0;
            while (i < 10b) {
                if (i == 5) break;
                else continue;
            }
        }
    "#;
    assert_eq!(
        body_events(source),
        vec![
            "declare start false INT i",
            "declare i = INT",
            "id i",
            "byte 10",
            "Less",
            "condition BOOL",
            "open loop",
            "open scope",
            "open scope",
            "id i",
            "Equal",
            "condition BOOL",
            "open scope",
            "break",
            "close scope",
            "open scope",
            "continue",
            "close scope",
            "close scope",
            "close scope",
            "close loop",
        ]
    );
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let source = "void main() { if (a) if (d) break; else continue; }";
    assert_eq!(
        body_events(source),
        vec![
            "id a",
            "condition INT",
            "open scope",
            "id d",
            "condition INT",
            "open scope",
            "break",
            "close scope",
            "open scope",
            "continue",
            "close scope",
            "close scope",
        ]
    );
}

#[test]
fn test_arithmetic_precedence_and_cast() {
    let source = "void main() { x = a + d * (int) c; }";
    assert_eq!(
        body_events(source),
        vec![
            "id a",
            "id d",
            "id c",
            "cast INT -> INT",
            "Multiply INT INT",
            "Add INT INT",
            "assign x = INT",
        ]
    );
}

#[test]
fn test_cast_binds_tighter_than_addition() {
    let source = "void main() { x = (byte) a + d; }";
    assert_eq!(
        body_events(source),
        vec!["id a", "cast INT -> BYTE", "id d", "Add BYTE INT", "assign x = INT"]
    );
}

#[test]
fn test_logical_precedence() {
    let source = "void main() { x = not a and d or c; }";
    assert_eq!(
        body_events(source),
        vec!["id a", "not", "id d", "And", "id c", "Or", "assign x = BOOL"]
    );
}

#[test]
fn test_call_arguments_in_source_order() {
    let source = r#"void main() { f(1, 2b, "s"); }"#;
    assert_eq!(body_events(source), vec!["byte 2", "call f(INT,BYTE,STRING)"]);
}

#[test]
fn test_return_without_value() {
    let source = "void main() { return; }";
    assert_eq!(body_events(source), vec!["return"]);
}

#[test]
fn test_declarations() {
    let source = "void main() { const bool flag = true; byte b1; }";
    assert_eq!(
        body_events(source),
        vec![
            "declare start true BOOL flag",
            "declare flag = BOOL",
            "declare start false BYTE b1",
            "declare b1",
        ]
    );
}

#[test]
fn test_empty_body_is_syntax_error() {
    let err = record("void main()\n{\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_missing_semicolon() {
    let err = record("void main() {\n  int x = 5\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_string_is_not_a_declarable_type() {
    let err = record("void main() { string s; }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
}

#[test]
fn test_truncated_input() {
    let err = record("void main() { print(\"hi\");").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_action_error_stops_parsing() {
    let tokens = tokenize("void main() { int y = x; int z = 1; }").unwrap();
    let mut recorder = Recorder {
        reject_identifier: Some("x".to_string()),
        ..Recorder::default()
    };

    let err = parse(&tokens, &mut recorder).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedIdentifier);
    assert_eq!(
        recorder.events.last().map(String::as_str),
        Some("declare start false INT y")
    );
}

#[test]
fn test_b_is_reserved_for_byte_literals() {
    let err = record("void main() {\n  int b = 1;\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(2));
}

fn parenthesized(depth: usize) -> String {
    format!(
        "void main() {{ x = {}1{}; }}",
        "(".repeat(depth),
        ")".repeat(depth)
    )
}

fn nested_blocks(depth: usize) -> String {
    format!(
        "void main() {{\n{}return;{}\n}}",
        "{".repeat(depth),
        "}".repeat(depth)
    )
}

#[test]
fn test_moderate_nesting_is_accepted() {
    assert!(record(&parenthesized(50)).is_ok());
    assert!(record(&nested_blocks(50)).is_ok());
}

#[test]
fn test_deep_parentheses_are_a_syntax_error() {
    let err = record(&parenthesized(20_000)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(1));

    let err = record(&parenthesized(MAX_NESTING_DEPTH)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
}

#[test]
fn test_deep_blocks_are_a_syntax_error() {
    let err = record(&nested_blocks(20_000)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_deep_not_chain_is_a_syntax_error() {
    let source = format!("void main() {{ x = {}true; }}", "not ".repeat(20_000));
    let err = record(&source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
}
