#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::{interpreter::evaluate, value::Scope},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// An offset together with the name of the file it belongs to.
///
/// Lexer errors store a byte offset into the source; parser errors store a
/// token index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Runs the whole pipeline: tokenize, parse, then evaluate against `scope`.
///
/// Only structural problems in the source are reported as errors.
pub fn run(source: &str, file: Option<String>, scope: &Scope) -> Result<(), Error> {
    let file_name = file.unwrap_or_else(|| String::from("shell"));

    let tokens = tokenize(source.to_string(), Some(file_name.clone()))?;
    let program = parse(tokens, Rc::new(file_name))?;
    evaluate(&program, scope);

    Ok(())
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text, and the offset within
/// the line, or `None` when the offset is past the end of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}


pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        error: message
        -> demo.chain
           |
        2 | testLog("hello)
          | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file);

    let located = if error.is_source_offset() {
        get_line_at_position(source, error.get_position().0)
    } else {
        None
    };

    let Some((line, line_text, line_pos)) = located else {
        eprintln!("   at token {}", error.get_position().0);
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
