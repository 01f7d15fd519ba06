//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedSymbol { symbol: '@' },
        Position(10, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedSymbol");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.expr".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "x".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.expr");
}

#[test]
fn test_unterminated_string_message() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::null());

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(
        error.get_message(),
        "invalid string literal: the string has to end with symbol=(\")"
    );
}

#[test]
fn test_unknown_operators_message() {
    let error = Error::new(
        ErrorImpl::UnknownOperators {
            first: '+',
            second: '*',
        },
        Position::null(),
    );

    assert_eq!(error.get_message(), "unknown operators=(+, *)");
    assert_eq!(
        error.get_tip().to_string(),
        "`+*` is not an operator, separate the operators with a space"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedSymbol { symbol: '#' }, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnrecognisedSymbol { symbol: '#' },
        Position(3, Rc::new("shell".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised symbol: '#' at shell:3");
}

#[test]
fn test_error_kinds_compare() {
    let first = ErrorImpl::UnterminatedChar {
        found: "EOF".to_string(),
    };
    let second = ErrorImpl::UnterminatedChar {
        found: "EOF".to_string(),
    };

    assert_eq!(first, second);
    assert_ne!(first, ErrorImpl::UnterminatedString);
}
