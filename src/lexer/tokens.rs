use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Define);
        map.insert("var", TokenKind::Variable);
        map.insert("func", TokenKind::Function);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elseif", TokenKind::ElseIf);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Multiply);
        map.insert('/', TokenKind::Divide);
        map.insert('(', TokenKind::LeftBracket);
        map.insert(')', TokenKind::RightBracket);
        map.insert('{', TokenKind::LeftBrace);
        map.insert('}', TokenKind::RightBrace);
        map.insert('=', TokenKind::Assign);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::More);
        map.insert('&', TokenKind::And);
        map.insert('|', TokenKind::Or);
        map.insert('!', TokenKind::Not);
        map.insert(',', TokenKind::Comma);
        map.insert(';', TokenKind::Semicolon);
        map
    };

    /// Two-character operators, keyed by the kinds of their halves.
    pub static ref COMPOUND_LOOKUP: HashMap<(TokenKind, TokenKind), TokenKind> = {
        let mut map = HashMap::new();
        map.insert((TokenKind::Less, TokenKind::Assign), TokenKind::LessOrEq);
        map.insert((TokenKind::More, TokenKind::Assign), TokenKind::MoreOrEq);
        map.insert((TokenKind::Assign, TokenKind::Assign), TokenKind::Eq);
        map.insert((TokenKind::Not, TokenKind::Assign), TokenKind::NotEq);
        map.insert((TokenKind::And, TokenKind::And), TokenKind::AndAnd);
        map.insert((TokenKind::Or, TokenKind::Or), TokenKind::OrOr);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Undefined,
    Number, // 1, 2, 23, 34
    Char,   // 'h', '#'
    Bool,   // true, false
    Str,    // "Hello", "world"

    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /

    Assign,    // =
    Less,      // <
    LessOrEq,  // <=
    More,      // >
    MoreOrEq,  // >=
    Not,       // !
    NotEq,     // !=
    Eq,        // ==
    And,       // &
    AndAnd,    // &&
    Or,        // |
    OrOr,      // ||
    Comma,     // ,
    Semicolon, // ;
    Word,      // myVariableName, myFuncName23, myArray_Name34

    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // (
    RightBracket, // )

    // Reserved
    Define,
    Variable,
    Function,
    While,
    If,
    Else,
    ElseIf,
}

impl TokenKind {
    pub fn is_additive(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, TokenKind::Multiply | TokenKind::Divide)
    }

    /// Literal kinds allowed at a primitive position of an expression.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Str | TokenKind::Char | TokenKind::Bool
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit. The span records where it came from but is not part of
/// its identity: two tokens are equal when kind and value match.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type='{}':value='{}'", self.kind, self.value)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Undefined
    }
}
