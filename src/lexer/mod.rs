//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Two-character operator disambiguation
//! - Token position tracking for error reporting
//! - Lexical diagnostics reported as `Undefined` tokens

pub mod lexer;
pub mod tokens;
