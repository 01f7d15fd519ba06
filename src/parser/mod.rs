//! Parser module for building the expression tree.
//!
//! This module transforms a stream of tokens into an [`crate::ast::ast::Ast`].
//! It handles:
//!
//! - The token cursor and parser facade (`parser`)
//! - Expression parsing with `+`/`-` nested below `*`/`/` (`expr`)
//! - Warnings for tokens the expression grammar does not cover
//!
//! The parser never fails: malformed input still produces a tree.

pub mod expr;
pub mod parser;
