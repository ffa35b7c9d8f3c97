//! Integration tests for end-to-end lexing.
//!
//! These tests verify that whole nusha programs tokenize correctly,
//! from raw source text through indentation synthesis to the final
//! end-of-stream marker, and that failures carry accurate positions.

use nusha::{
    display_error,
    lexer::lexer::tokenize,
    lexer::tokens::{Token, TokenKind},
    Position,
};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, line: u32, column: u32) -> Token {
    Token {
        kind,
        position: Position::new(line, column),
    }
}

#[test]
fn test_lex_block_program() {
    let source = "unique point\n    var x = 1\n    var y = 2.5\n    swap => { x , y }\n";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Unique, 1, 1),
            tok(TokenKind::Identifier("point".to_string()), 1, 8),
            tok(TokenKind::Newline, 1, 13),
            tok(TokenKind::Indent, 2, 1),
            tok(TokenKind::Var, 2, 5),
            tok(TokenKind::Identifier("x".to_string()), 2, 9),
            tok(TokenKind::Equal, 2, 11),
            tok(TokenKind::Number("1".to_string()), 2, 13),
            tok(TokenKind::Newline, 2, 14),
            tok(TokenKind::Var, 3, 5),
            tok(TokenKind::Identifier("y".to_string()), 3, 9),
            tok(TokenKind::Equal, 3, 11),
            tok(TokenKind::Number("2.5".to_string()), 3, 13),
            tok(TokenKind::Newline, 3, 16),
            tok(TokenKind::Identifier("swap".to_string()), 4, 5),
            tok(TokenKind::Yields, 4, 10),
            tok(TokenKind::LeftCurly, 4, 13),
            tok(TokenKind::Identifier("x".to_string()), 4, 15),
            tok(TokenKind::Comma, 4, 17),
            tok(TokenKind::Identifier("y".to_string()), 4, 19),
            tok(TokenKind::RightCurly, 4, 21),
            tok(TokenKind::Newline, 4, 22),
            tok(TokenKind::Dedent, 5, 1),
            tok(TokenKind::Newline, 5, 1),
        ]
    );
}

#[test]
fn test_lex_list_and_member_access() {
    let source = "var items = [ 1 , 2.5 , 3 ]\nitems . first != items . last\n";
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<&TokenKind> = tokens.iter().map(|token| &token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TokenKind::Var,
            &TokenKind::Identifier("items".to_string()),
            &TokenKind::Equal,
            &TokenKind::LeftBrace,
            &TokenKind::Number("1".to_string()),
            &TokenKind::Comma,
            &TokenKind::Number("2.5".to_string()),
            &TokenKind::Comma,
            &TokenKind::Number("3".to_string()),
            &TokenKind::RightBrace,
            &TokenKind::Newline,
            &TokenKind::Identifier("items".to_string()),
            &TokenKind::Dot,
            &TokenKind::Identifier("first".to_string()),
            &TokenKind::NotEqual,
            &TokenKind::Identifier("items".to_string()),
            &TokenKind::Dot,
            &TokenKind::Identifier("last".to_string()),
            &TokenKind::Newline,
            &TokenKind::Newline,
        ]
    );
}

#[test]
fn test_stream_invariants() {
    let sources = [
        "",
        "var x = 1",
        "unique thing\n    var a = 1\n        b : 2\n",
        "a\n    b\n\n    c\nd\n",
        "x => y\n",
    ];

    for source in sources {
        let tokens = tokenize(source).unwrap();

        assert_eq!(
            tokens.last().unwrap().kind,
            TokenKind::Newline,
            "stream for {:?} must end with a newline",
            source
        );

        let indents = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Indent)
            .count();
        let dedents = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Dedent)
            .count();

        assert_eq!(indents, dedents, "unbalanced stream for {:?}", source);
    }
}

#[test]
fn test_invalid_indentation_in_program() {
    let source = "unique point\n   x = 1\n";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidIndentation");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 1);

    display_error(&error, source);
}

#[test]
fn test_malformed_number_in_program() {
    let source = "var pi = 3.14.15\n";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 14);
}

#[test]
fn test_unexpected_character_in_program() {
    let source = "var a = #\n";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 9);

    display_error(&error, source);
}
