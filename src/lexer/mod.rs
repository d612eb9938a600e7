//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat list of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of identifiers, string literals and delimiters
//! - Skipping of every character the language does not know about

pub mod lexer;
pub mod tokens;
