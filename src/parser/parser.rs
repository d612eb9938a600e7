//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct, which owns the token list and a
//! cursor into it, and the `parse` entry point. The grammar rules live in
//! `expr.rs` and communicate only through the cursor and their return values.

use std::rc::Rc;

use crate::{ast::ast::Program, errors::errors::Error, lexer::tokens::Token, Position};

use super::expr::parse_expr;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token list
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing, if any are left.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<&Token> {
        self.pos += 1;
        self.tokens.get(self.pos - 1)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the current position, measured in tokens.
    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }
}

/// Parses a list of tokens into a program.
///
/// Repeatedly parses nodes until the tokens run out, keeping every node
/// that was produced. Tokens that start no node are dropped.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The program body, or an `UnterminatedCall` error when a call's argument
/// list runs past the last token.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut body = vec![];

    while parser.has_tokens() {
        if let Some(node) = parse_expr(&mut parser)? {
            body.push(node);
        }
    }

    tracing::debug!(file = %parser.file, nodes = body.len(), "parsed program");
    Ok(Program { body })
}
