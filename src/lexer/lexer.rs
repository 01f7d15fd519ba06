use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, COMPOUND_LOOKUP, OPERATOR_LOOKUP, RESERVED_LOOKUP};

/// Receives the lexer positioned at the start of the match and the matched
/// text. A handler must advance the lexer by at least one character.
pub type RegexHandler = fn(&mut Lexer, &str);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[\-+*/(){}=<>\&|!,;]{1,2}").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
    ];
}

/// Scans source text into tokens.
///
/// A `Lexer` can be reused: every call to [`Lexer::tokenize`] starts from a
/// clean state. Lexical errors never stop the scan, they are appended to the
/// token stream as `Undefined` tokens and recorded in [`Lexer::diagnostics`].
pub struct Lexer {
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            diagnostics: vec![],
            source: String::new(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn tokenize(&mut self, source: impl Into<String>) -> Vec<Token> {
        self.source = source.into();
        self.pos = 0;
        self.tokens.clear();
        self.diagnostics.clear();

        debug!("tokenizing {} ({} bytes)", self.file, self.source.len());

        while !self.at_eof() {
            self.step();
        }

        debug!(
            "tokenized {} into {} tokens with {} diagnostics",
            self.file,
            self.tokens.len(),
            self.diagnostics.len()
        );

        std::mem::take(&mut self.tokens)
    }

    /// Diagnostics reported by the last call to [`Lexer::tokenize`].
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    fn step(&mut self) {
        for pattern in PATTERNS.iter() {
            let matched = pattern
                .regex
                .find(self.remainder())
                .map(|found| found.as_str().to_string());

            if let Some(matched) = matched {
                (pattern.handler)(self, &matched);
                return;
            }
        }

        unrecognised_handler(self);
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Records a diagnostic covering `start..end` and appends it to the
    /// stream as an `Undefined` token. A diagnostic equal to the token right
    /// before it is dropped, so one malformed region reports once.
    pub fn mark_error(&mut self, error_impl: ErrorImpl, start: usize, end: usize) {
        let error = Error::new(error_impl, Position(start as u32, Rc::clone(&self.file)));
        let token = MK_TOKEN!(TokenKind::Undefined, error.get_message(), MK_SPAN!(self, start, end));

        if self.tokens.last() == Some(&token) {
            trace!("suppressed repeated diagnostic: {}", error);
            return;
        }

        debug!("lexer diagnostic: {}", error);
        self.diagnostics.push(error);
        self.push(token);
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.pos;
    let body_start = start + matched.len();

    match lexer.source[body_start..].find('"') {
        Some(length) => {
            let body_end = body_start + length;
            let value = lexer.source[body_start..body_end].to_string();
            let end = body_end + 1;

            lexer.push(MK_TOKEN!(TokenKind::Str, value, MK_SPAN!(lexer, start, end)));
            lexer.pos = end;
        }
        None => {
            let end = lexer.source.len();
            lexer.mark_error(ErrorImpl::UnterminatedString, start, end);
            lexer.pos = end;
        }
    }
}

fn char_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.pos;
    let body_start = start + matched.len();

    match lexer.source[body_start..].find('\'') {
        Some(length) => {
            let body_end = body_start + length;
            let value = lexer.source[body_start..body_end].to_string();
            let end = body_end + 1;

            if value.chars().count() == 1 {
                lexer.push(MK_TOKEN!(TokenKind::Char, value, MK_SPAN!(lexer, start, end)));
            } else {
                lexer.mark_error(ErrorImpl::InvalidCharLiteral { literal: value }, start, end);
            }
            lexer.pos = end;
        }
        None => {
            let end = lexer.source.len();
            lexer.mark_error(
                ErrorImpl::UnterminatedChar {
                    found: String::from("EOF"),
                },
                start,
                end,
            );
            lexer.pos = end;
        }
    }
}

/// Keywords only match a whole identifier run, so `ifx` stays a `Word`.
fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.pos;
    let end = start + matched.len();
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Word);

    lexer.push(MK_TOKEN!(kind, String::from(matched), MK_SPAN!(lexer, start, end)));
    lexer.advance_n(matched.len());
}

/// `matched` holds one or two operator characters. A pair is either one of
/// the compound operators or an error; both characters are consumed.
fn operator_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.pos;
    let end = start + matched.len();

    let mut buffer: [Option<(char, TokenKind)>; 2] = [None, None];
    for (slot, symbol) in buffer.iter_mut().zip(matched.chars()) {
        *slot = OPERATOR_LOOKUP.get(&symbol).map(|kind| (symbol, *kind));
    }

    match buffer {
        [Some((_, kind)), None] => {
            lexer.push(MK_TOKEN!(kind, String::from(matched), MK_SPAN!(lexer, start, end)));
        }
        [Some((first, first_kind)), Some((second, second_kind))] => {
            match COMPOUND_LOOKUP.get(&(first_kind, second_kind)) {
                Some(kind) => {
                    lexer.push(MK_TOKEN!(*kind, String::from(matched), MK_SPAN!(lexer, start, end)));
                }
                None => {
                    lexer.mark_error(ErrorImpl::UnknownOperators { first, second }, start, end);
                }
            }
        }
        _ => {}
    }

    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.pos;
    let end = start + matched.len();

    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched), MK_SPAN!(lexer, start, end)));
    lexer.advance_n(matched.len());
}

fn unrecognised_handler(lexer: &mut Lexer) {
    let Some(symbol) = lexer.at() else {
        return;
    };
    let start = lexer.pos;
    let end = start + symbol.len_utf8();

    lexer.mark_error(ErrorImpl::UnrecognisedSymbol { symbol }, start, end);
    lexer.advance_n(symbol.len_utf8());
}

/// Tokenizes `source` in one pass. Diagnostics show up in the returned
/// stream as `Undefined` tokens.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(file).tokenize(source)
}

/// Like [`tokenize`], additionally returning every diagnostic with its
/// source position.
pub fn tokenize_with_diagnostics(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(file);
    let tokens = lex.tokenize(source);

    (tokens, lex.take_diagnostics())
}
