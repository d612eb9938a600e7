//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a list of tokens
//! into a program body. It is a single-pass recursive descent parser with
//! one token of lookahead and handles:
//!
//! - String literals and bare identifiers
//! - Property access chains (`a.b.c`, `a[b]`)
//! - Call expressions, including chained calls (`f(a)(b)(c)`)
//!
//! Tokens that cannot start a node are skipped without producing anything.

pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
