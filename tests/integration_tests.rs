//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing using only
//! the public API, the way the driver does.

use exprc::{
    ast::ast::{Ast, NodeType},
    lexer::{
        lexer::{tokenize, tokenize_with_diagnostics, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
    render_error,
};

#[test]
fn test_pipeline_simple_expression() {
    let tokens = tokenize("2 + 3 * 4".to_string(), Some("test.expr".to_string()));
    let printed: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        printed,
        vec![
            "type='Number':value='2'",
            "type='Plus':value='+'",
            "type='Number':value='3'",
            "type='Multiply':value='*'",
            "type='Number':value='4'",
        ]
    );

    let ast = parse(tokens);
    assert_eq!(ast.to_string(), "2+3*4");
    assert_eq!(
        ast.fmt_tree(),
        [
            "BaseStatement",
            "  PlusMinus '+'",
            "    MultiplyDivide",
            "      Primitive '2'",
            "    BaseStatement",
            "      PlusMinus",
            "        MultiplyDivide '*'",
            "          Primitive '3'",
            "          BaseStatement",
            "            PlusMinus",
            "              MultiplyDivide",
            "                Primitive '4'",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_pipeline_reuses_instances() {
    let mut lexer = Lexer::new(Some("session.expr".to_string()));
    let mut parser = Parser::new();

    for (source, rendered) in [("1 + 2", "1+2"), ("3 * 4 - 5", "3*4-5"), ("  ", "")] {
        let ast = parser.parse(lexer.tokenize(source));
        assert_eq!(ast.render(), rendered);
        assert!(lexer.diagnostics().is_empty());
        assert!(parser.warnings().is_empty());
    }
}

#[test]
fn test_pipeline_with_lexer_diagnostics() {
    let source = "1 + 2 # 3";
    let (tokens, diagnostics) = tokenize_with_diagnostics(source.to_string(), Some("bad.expr".to_string()));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(tokens.iter().filter(|token| token.is_error()).count(), 1);

    let rendered = render_error(&diagnostics[0], source);
    assert!(rendered.starts_with("Error: UnrecognisedSymbol\n-> bad.expr\n"));
    assert!(rendered.ends_with("1 | 1 + 2 # 3\n  | ------^\n"));

    // The diagnostic token still reaches the parser as an out-of-contract primitive.
    let mut parser = Parser::new();
    parser.parse(tokens);
    assert_eq!(parser.warnings().len(), 1);
}

#[test]
fn test_pipeline_right_associative_minus() {
    let ast = parse(tokenize("10 - 2 - 3".to_string(), None));

    let outer = ast.root().get_left().unwrap();
    assert_eq!(ast[outer].get_role(), NodeType::PlusMinus);
    assert_eq!(ast[outer].get_token().unwrap().kind, TokenKind::Minus);

    let inner_statement = ast[outer].get_right().unwrap();
    let inner = ast[inner_statement].get_left().unwrap();
    assert_eq!(ast[inner].get_token().unwrap().kind, TokenKind::Minus);
    assert_eq!(ast[inner].get_parent(), Some(inner_statement));
}

#[test]
fn test_pipeline_unterminated_string_terminates() {
    let tokens = tokenize("\"abc".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Undefined);

    let ast: Ast = parse(tokens);
    assert_eq!(ast.root().get_role(), NodeType::BaseStatement);
}
