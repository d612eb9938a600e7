use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedCall { .. } => "UnterminatedCall",
        }
    }

    /// Whether the position is a byte offset into the source text.
    ///
    /// Parser errors point at a token index instead, since tokens carry no
    /// source location.
    pub fn is_source_offset(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnterminatedString { .. })
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { literal } if literal.is_empty() => ErrorTip::None,
            ErrorImpl::UnterminatedString { literal } => ErrorTip::Suggestion(format!(
                "String `{}` is never closed, did you miss a `\"`?",
                literal
            )),
            ErrorImpl::UnterminatedCall { callee: Some(callee) } => ErrorTip::Suggestion(
                format!("Call to `{}` is never closed, did you miss a `)`?", callee),
            ),
            ErrorImpl::UnterminatedCall { callee: None } => ErrorTip::Suggestion(String::from(
                "Chained call is never closed, did you miss a `)`?",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("unterminated call argument list: {callee:?}")]
    UnterminatedCall { callee: Option<String> },
}
