use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{CallExpr, IdentifierExpr, StringLiteralExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one node starting at the current token.
///
/// Returns `Ok(None)` when the current token starts no node (it is consumed)
/// or when the tokens have run out.
pub fn parse_expr(parser: &mut Parser) -> Result<Option<ExprWrapper>, Error> {
    let token = match parser.advance() {
        Some(token) => token.clone(),
        None => return Ok(None),
    };

    match token.kind {
        TokenKind::String => Ok(Some(ExprWrapper::new(StringLiteralExpr { value: token.value }))),
        TokenKind::Identifier => parse_identifier_expr(parser, token.value).map(Some),
        _ => Ok(None),
    }
}

/// Parses whatever follows an identifier that has already been consumed.
///
/// A property delimiter and a call delimiter are mutually exclusive here:
/// whichever comes first decides the shape of the node.
fn parse_identifier_expr(parser: &mut Parser, name: String) -> Result<ExprWrapper, Error> {
    let next = parser.current_token().cloned();

    match next {
        Some(token) if token.kind == TokenKind::PropertyDelimiter => {
            parser.advance();
            let property = parse_expr(parser)?;
            Ok(ExprWrapper::new(IdentifierExpr { name, property }))
        }
        Some(token) if token.is_call_open() => {
            Ok(ExprWrapper::new(parse_call_expr(parser, Some(name))?))
        }
        _ => Ok(ExprWrapper::new(IdentifierExpr { name, property: None })),
    }
}

/// Parses a call starting at its `(` and every call chained after it.
///
/// Chained links are built with `name: None`; they are invoked on the
/// previous link's result rather than looked up.
pub fn parse_call_expr(parser: &mut Parser, name: Option<String>) -> Result<CallExpr, Error> {
    let start = parser.get_position();
    parser.advance();

    let mut params = vec![];

    loop {
        let token = parser.current_token().cloned();

        match token {
            None => {
                return Err(Error::new(ErrorImpl::UnterminatedCall { callee: name }, start));
            }
            Some(token) if token.is_call_close() => break,
            Some(_) => {
                if let Some(param) = parse_expr(parser)? {
                    params.push(param);
                }
            }
        }
    }

    // Closing `)`
    parser.advance();

    let child = if parser.current_token().is_some_and(|token| token.is_call_open()) {
        Some(Box::new(parse_call_expr(parser, None)?))
    } else {
        None
    };

    Ok(CallExpr { name, params, child })
}
