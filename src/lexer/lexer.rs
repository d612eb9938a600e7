use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, DELIMITER_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Order matters: the first pattern matching at the cursor wins. The skip
// pattern covers every character the others miss, so some pattern always
// matches.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[()\.\[\]]").unwrap(), handler: delimiter_handler },
        RegexPattern { regex: Regex::new(r#"^"([^"]*)("?)"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r#"^[^()\.\[\]"a-zA-Z]+"#).unwrap(), handler: skip_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The unconsumed part of the source, starting at the cursor.
    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn delimiter_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);

    if let Some(kind) = matched.chars().next().and_then(|c| DELIMITER_LOOKUP.get(&c)) {
        lexer.push(MK_TOKEN!(*kind, matched.clone()));
    }

    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let (literal, closed) = match regex.captures(lexer.remainder()) {
        Some(captures) => (
            captures.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            captures.get(2).is_some_and(|m| !m.as_str().is_empty()),
        ),
        None => (String::new(), false),
    };

    if !closed {
        return Err(Error::new(
            ErrorImpl::UnterminatedString { literal },
            lexer.get_position(),
        ));
    }

    // Opening and closing quotes are not part of the value
    lexer.advance_n(literal.len() + 2);
    lexer.push(MK_TOKEN!(TokenKind::String, literal));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(TokenKind::Identifier, value));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

/// Converts source text into an ordered list of tokens.
///
/// Characters that start no token are skipped. The only failure is a string
/// literal whose closing quote never appears.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                break;
            }
        }
    }

    tracing::debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
