//! Parser facade.
//!
//! The `Parser` owns the token cursor and the warnings collected while
//! building a tree; the tree itself is built by the expression parser in
//! [`super::expr`]. The cursor and warnings are reset on every call to
//! [`Parser::parse`].

use log::debug;

use crate::{
    ast::ast::Ast,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::expr::parse_base_expr;

/// Token cursor shared by the expression parser's grammar functions.
#[derive(Default)]
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Out-of-contract input seen during the last parse
    warnings: Vec<Error>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            tokens: vec![],
            pos: 0,
            warnings: vec![],
        }
    }

    /// Builds the expression tree for `tokens`. Never fails: input the
    /// grammar does not cover is still placed in the tree and reported
    /// through [`Parser::warnings`].
    pub fn parse(&mut self, tokens: Vec<Token>) -> Ast {
        self.tokens = tokens;
        self.pos = 0;
        self.warnings.clear();

        debug!("parsing {} tokens", self.tokens.len());
        let ast = parse_base_expr(self);
        debug!(
            "parsed {} nodes with {} warnings",
            ast.len(),
            self.warnings.len()
        );

        ast
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    pub fn warn(&mut self, error: Error) {
        self.warnings.push(error);
    }

    /// Returns the source position of the current token, or of the end of
    /// the last token once the cursor is exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => self
                .tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null),
        }
    }
}

/// Parses a stream of tokens into an expression tree.
pub fn parse(tokens: Vec<Token>) -> Ast {
    Parser::new().parse(tokens)
}

/// Like [`parse`], also returning the warnings for out-of-contract tokens.
pub fn parse_with_warnings(tokens: Vec<Token>) -> (Ast, Vec<Error>) {
    let mut parser = Parser::new();
    let ast = parser.parse(tokens);

    (ast, parser.warnings)
}
