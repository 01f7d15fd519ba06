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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message carried by the `Undefined` token standing in for this error.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar { .. } => "UnterminatedChar",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
            ErrorImpl::UnknownOperators { .. } => "UnknownOperators",
            ErrorImpl::UnrecognisedSymbol { .. } => "UnrecognisedSymbol",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Close the string literal with `\"`"))
            }
            ErrorImpl::UnterminatedChar { .. } => {
                ErrorTip::Suggestion(String::from("Close the character literal with `'`"))
            }
            ErrorImpl::InvalidCharLiteral { literal } => ErrorTip::Suggestion(format!(
                "`{}` is not a single character, did you mean a string literal?",
                literal
            )),
            ErrorImpl::UnknownOperators { first, second } => ErrorTip::Suggestion(format!(
                "`{}{}` is not an operator, separate the operators with a space",
                first, second
            )),
            ErrorImpl::UnrecognisedSymbol { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Expected a number, string, character or bool literal, found `{}`",
                token
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

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
    #[error("invalid string literal: the string has to end with symbol=(\")")]
    UnterminatedString,
    #[error("unexpected symbol=({found}), expected symbol=(')")]
    UnterminatedChar { found: String },
    #[error("invalid character literal: {literal:?}")]
    InvalidCharLiteral { literal: String },
    #[error("unknown operators=({first}, {second})")]
    UnknownOperators { first: char, second: char },
    #[error("unrecognised symbol: {symbol:?}")]
    UnrecognisedSymbol { symbol: char },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("failed to read {path:?}: {message}")]
    Io { path: String, message: String },
}
