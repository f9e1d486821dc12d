//! Integration tests for the front end.
//!
//! These drive the public API the way a REPL or parser does: construct a
//! lexer, pull tokens until end of input, hand them to the parser.

use std::io::Cursor;

use monkey::{
    ast::{ast::Node, statements::LetStmt},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    parser::parser::Parser,
    repl, MK_TOKEN,
};
use pretty_assertions::assert_eq;

#[test]
fn test_driver_contract() {
    let mut lexer = Lexer::new("let five = 5;");
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push(token);
    }

    assert_eq!(
        tokens,
        vec![
            MK_TOKEN!(TokenKind::Let, "let"),
            MK_TOKEN!(TokenKind::Ident, "five"),
            MK_TOKEN!(TokenKind::Assign, "="),
            MK_TOKEN!(TokenKind::Int, "5"),
            MK_TOKEN!(TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_tokenize_full_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
	return true;
} else {
	return false;
}

10 == 10;
10 != 9;
"#;

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Eq, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    let expected: Vec<Token> = expected
        .into_iter()
        .map(|(kind, literal)| Token::new(kind, literal))
        .collect();

    assert_eq!(tokenize(source), expected);
}

#[test]
fn test_literals_are_source_slices() {
    let source = "let   answer_value = 4242 ; @";

    for token in tokenize(source) {
        match token.kind {
            TokenKind::Eof => assert!(token.literal.is_empty()),
            TokenKind::Illegal => assert_eq!(token.literal.len(), 1),
            _ => {
                assert!(!token.literal.is_empty());
                assert!(source.contains(&token.literal));
            }
        }
    }
}

#[test]
fn test_independent_lexers() {
    let mut first = Lexer::new("a b");
    let mut second = Lexer::new("c");

    assert_eq!(first.next_token().literal, "a");
    assert_eq!(second.next_token().literal, "c");
    assert_eq!(first.next_token().literal, "b");
    assert_eq!(second.next_token().kind, TokenKind::Eof);
    assert_eq!(first.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_parse_from_lexer() {
    let mut parser = Parser::new(Lexer::new("let x = 5; let y = x;"));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 2);
    assert_eq!(program.token_literal(), "let");

    let names: Vec<&str> = program
        .iter()
        .map(|stmt| stmt.downcast_ref::<LetStmt>().unwrap().name.value.as_str())
        .collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_repl_session() {
    let mut output = Vec::new();
    repl::start(Cursor::new("x=5\n@\n"), &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        ">> {kind: IDENT, literal: x}\n\
         {kind: =, literal: =}\n\
         {kind: INT, literal: 5}\n\
         >> {kind: ILLEGAL, literal: @}\n\
         >> "
    );
}
