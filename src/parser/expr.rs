//! Expression parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! statement  := plus_minus
//! plus_minus := mult_div ( ('+' | '-') statement )?
//! mult_div   := primitive ( ('*' | '/') statement )?
//! primitive  := NUMBER | STRING | CHAR | BOOL
//! ```
//!
//! The right-hand side of every operator is a whole `statement`, so all four
//! operators associate to the right: `10 - 2 - 3` is `10 - (2 - 3)` and
//! `2 * 3 + 4` is `2 * (3 + 4)`.
//!
//! The tree is built by one loop that keeps a current node and hands it to
//! the function for that node's grammar level. Each function returns the
//! next current node, so nesting depth never turns into call depth.

use log::{trace, warn};

use crate::{
    ast::ast::{Ast, NodeId, NodeType},
    errors::errors::{Error, ErrorImpl},
};

use super::parser::Parser;

pub fn parse_base_expr(parser: &mut Parser) -> Ast {
    let mut ast = Ast::new();
    let mut current = Ast::ROOT;

    while parser.has_tokens() {
        current = match ast[current].get_role() {
            NodeType::BaseStatement => parse_statement(&mut ast, current),
            NodeType::PlusMinus => parse_plus_minus(parser, &mut ast, current),
            NodeType::MultiplyDivide => parse_mult_div(parser, &mut ast, current),
            // primitives are leaves and never become current
            NodeType::Primitive => ast.parent(current).unwrap_or(Ast::ROOT),
        };
    }

    ast
}

pub fn parse_statement(ast: &mut Ast, node: NodeId) -> NodeId {
    trace!("statement #{}", node);
    ast.attach(node, NodeType::PlusMinus, None)
}

pub fn parse_plus_minus(parser: &mut Parser, ast: &mut Ast, node: NodeId) -> NodeId {
    trace!("plus_minus #{} at {:?}", node, parser.current_token_kind());

    match parser.current_token_kind() {
        Some(kind) if kind.is_additive() => {
            if let Some(operator) = parser.advance() {
                ast.set_token(node, operator);
            }
            ast.attach(node, NodeType::BaseStatement, None)
        }
        _ => ast.attach(node, NodeType::MultiplyDivide, None),
    }
}

pub fn parse_mult_div(parser: &mut Parser, ast: &mut Ast, node: NodeId) -> NodeId {
    trace!("mult_div #{} at {:?}", node, parser.current_token_kind());

    match parser.current_token_kind() {
        Some(kind) if kind.is_multiplicative() => {
            if let Some(operator) = parser.advance() {
                ast.set_token(node, operator);
            }
            ast.attach(node, NodeType::BaseStatement, None)
        }
        // hand the operator back to the enclosing plus_minus
        Some(kind) if kind.is_additive() => ast.parent(node).unwrap_or(Ast::ROOT),
        _ => parse_primitive(parser, ast, node),
    }
}

/// Attaches the current token as a `Primitive` child of `node` and stays on
/// `node`, so a following `*` or `/` still binds there.
pub fn parse_primitive(parser: &mut Parser, ast: &mut Ast, node: NodeId) -> NodeId {
    let position = parser.get_position();
    let Some(token) = parser.advance() else {
        return node;
    };

    if !token.kind.is_primitive() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            position,
        );
        warn!("{}", error);
        parser.warn(error);
    }

    ast.attach(node, NodeType::Primitive, Some(token));
    node
}
