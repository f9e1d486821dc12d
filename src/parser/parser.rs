//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from a [`Lexer`] on demand and keeps two of them
//! buffered: `current`, the token under examination, and `peek`, the one
//! after it. Statement parsing lives in [`super::stmt`].

use tracing::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, read one at a time
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Errors collected so far; parsing does not stop on the first one
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser and reads two tokens so that both `current`
    /// and `peek` are set.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: vec![],
        };

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Shifts `peek` into `current` and reads a fresh `peek`.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the peek token is of `expected_kind`. Otherwise records
    /// an error against the peek token and leaves the cursor where it is.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            true
        } else {
            self.peek_error(expected_kind);
            false
        }
    }

    fn peek_error(&mut self, expected_kind: TokenKind) {
        let token = self.peek.clone();
        let error_impl = if token.is(TokenKind::Illegal) {
            ErrorImpl::UnrecognisedToken {
                token: token.literal.clone(),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: token.kind,
            }
        };

        debug!(error = %error_impl, "parse error");
        self.errors.push(Error::new(error_impl, token));
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parses `source` in one go, returning the program and any errors.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
