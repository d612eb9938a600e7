use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref DELIMITER_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::CallDelimiter);
        map.insert(')', TokenKind::CallDelimiter);
        map.insert('.', TokenKind::PropertyDelimiter);
        map.insert('[', TokenKind::PropertyDelimiter);
        map.insert(']', TokenKind::PropertyDelimiter);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    String,

    CallDelimiter,     // ( )
    PropertyDelimiter, // . [ ]
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit. Tokens carry no source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    pub fn is_call_open(&self) -> bool {
        self.kind == TokenKind::CallDelimiter && self.value == "("
    }

    pub fn is_call_close(&self) -> bool {
        self.kind == TokenKind::CallDelimiter && self.value == ")"
    }
}
