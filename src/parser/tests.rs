//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - String literals and identifiers
//! - Property access chains
//! - Call expressions and chained calls
//! - Skipped tokens and unterminated calls

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{Expr, ExprType, Program},
        expressions::{CallExpr, IdentifierExpr, StringLiteralExpr},
    },
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.chain".to_string())).unwrap();
    parse(tokens, Rc::new("test.chain".to_string())).unwrap()
}

#[test]
fn test_parse_string_literal() {
    let program = parse_source(r#""hello""#);

    assert_eq!(program.body.len(), 1);
    let literal = program.body[0].downcast_ref::<StringLiteralExpr>().unwrap();
    assert_eq!(literal.value, "hello");
}

#[test]
fn test_parse_bare_identifier() {
    let program = parse_source("globalValue");

    let identifier = program.body[0].downcast_ref::<IdentifierExpr>().unwrap();
    assert_eq!(identifier.name, "globalValue");
    assert!(identifier.property.is_none());
}

#[test]
fn test_parse_property_chain() {
    let program = parse_source("a.b[c");

    assert_eq!(program.body.len(), 1);
    let a = program.body[0].downcast_ref::<IdentifierExpr>().unwrap();
    assert_eq!(a.name, "a");
    let b = a.property.as_ref().unwrap().downcast_ref::<IdentifierExpr>().unwrap();
    assert_eq!(b.name, "b");
    let c = b.property.as_ref().unwrap().downcast_ref::<IdentifierExpr>().unwrap();
    assert_eq!(c.name, "c");
    assert!(c.property.is_none());
}

#[test]
fn test_parse_method_call() {
    let program = parse_source(r#"myConsole.log("x")"#);

    assert_eq!(program.body.len(), 1);
    let console = program.body[0].downcast_ref::<IdentifierExpr>().unwrap();
    assert_eq!(console.name, "myConsole");

    let property = console.property.as_ref().unwrap();
    assert_eq!(property.get_expr_type(), ExprType::CallExpression);
    let log = property.downcast_ref::<CallExpr>().unwrap();
    assert_eq!(log.name.as_deref(), Some("log"));
    assert_eq!(log.params.len(), 1);
    assert!(log.child.is_none());
}

#[test]
fn test_parse_chained_call() {
    let program = parse_source("f(a)(b)");

    assert_eq!(program.body.len(), 1);
    let call = program.body[0].downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.name.as_deref(), Some("f"));
    assert_eq!(call.params.len(), 1);
    assert_eq!(call.params[0].downcast_ref::<IdentifierExpr>().unwrap().name, "a");

    let child = call.child.as_ref().unwrap();
    assert!(child.name.is_none());
    assert_eq!(child.params.len(), 1);
    assert_eq!(child.params[0].downcast_ref::<IdentifierExpr>().unwrap().name, "b");
    assert!(child.child.is_none());
}

#[test]
fn test_parse_chain_links_are_unnamed() {
    let program = parse_source("f()()()()");

    let call = program.body[0].downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.chain_depth(), 4);

    let mut link = call.child.as_deref();
    while let Some(current) = link {
        assert!(current.name.is_none());
        assert!(current.params.is_empty());
        link = current.child.as_deref();
    }
}

#[test]
fn test_parse_nested_calls_in_params() {
    let program = parse_source(r#"g(f("a") b)"#);

    assert_eq!(program.body.len(), 1);
    let g = program.body[0].downcast_ref::<CallExpr>().unwrap();
    assert_eq!(g.params.len(), 2);
    assert_eq!(g.params[0].get_expr_type(), ExprType::CallExpression);
    assert_eq!(g.params[1].get_expr_type(), ExprType::Identifier);
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source(
        r#"myConsole.log("hello world")()();myConsole.log("hello world2");testLog("hello word3");testLog(globalValue)"#,
    );

    assert_eq!(program.body.len(), 4);
    assert_eq!(program.body[0].get_expr_type(), ExprType::Identifier);
    assert_eq!(program.body[2].get_expr_type(), ExprType::CallExpression);
}

#[test]
fn test_parse_skips_stray_tokens() {
    let program = parse_source(r#") ( ] "kept" . name"#);

    assert_eq!(program.body.len(), 2);
    assert_eq!(program.body[0].get_expr_type(), ExprType::StringLiteral);
    assert_eq!(program.body[1].get_expr_type(), ExprType::Identifier);
}

#[test]
fn test_parse_property_at_end_of_input() {
    let program = parse_source("a.");

    let a = program.body[0].downcast_ref::<IdentifierExpr>().unwrap();
    assert!(a.property.is_none());
}

#[test]
fn test_parse_property_wins_over_call() {
    // `a` is followed by `.`, so the call belongs to `b`
    let program = parse_source("a.b(c)");

    let a = program.body[0].downcast_ref::<IdentifierExpr>().unwrap();
    let b = a.property.as_ref().unwrap().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(b.name.as_deref(), Some("b"));
}

#[test]
fn test_parse_unterminated_call() {
    let tokens = tokenize("testLog(a b".to_string(), None).unwrap();
    let error = parse(tokens, Rc::new("shell".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedCall");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnterminatedCall {
            callee: Some("testLog".to_string())
        }
    );
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_parse_unterminated_chain_link() {
    let tokens = tokenize("f(a)(".to_string(), None).unwrap();
    let error = parse(tokens, Rc::new("shell".to_string())).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnterminatedCall { callee: None }
    );
}

#[test]
fn test_parse_round_trip() {
    let sources = [
        r#"myConsole.log("hello world")()()"#,
        r#"testLog(globalValue) "lonely" a.b.c f(g(h) "x" y.z)(k)"#,
        "plain",
    ];

    for source in sources {
        let program = parse_source(source);
        let rendered = program.to_source();

        let original_tokens = tokenize(source.to_string(), None).unwrap();
        let rendered_tokens = tokenize(rendered.clone(), None).unwrap();
        assert_eq!(original_tokens, rendered_tokens, "rendered as {}", rendered);

        let reparsed = parse_source(&rendered);
        assert_eq!(reparsed.body.len(), program.body.len());
        assert_eq!(reparsed.to_source(), rendered);
    }
}
