//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while scanning and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical diagnostics and parser warnings
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
