use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based scanner over an owned input buffer.
///
/// `position` indexes the byte under examination (`ch`), `read_position`
/// the byte that will be read next. `ch` is `None` once the input is
/// exhausted.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        Lexer::from_bytes(input.as_bytes())
    }

    /// Binds a lexer to raw bytes. Input need not be valid UTF-8; bytes
    /// outside the vocabulary become `Illegal` tokens.
    pub fn from_bytes(input: &[u8]) -> Lexer {
        let mut lexer = Lexer {
            input: input.to_vec(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        // Stays put once past the end, so reads at EOF are idempotent.
        if self.read_position < self.input.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Consumes the maximal run of bytes matching `pred`, starting at the
    /// current byte, and returns it.
    fn read_while(&mut self, pred: fn(u8) -> bool) -> String {
        let start = self.position;
        while self.ch.is_some_and(pred) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Emits a token for the current byte, or for the current byte plus a
    /// following `=` when `paired` is given and the next byte is `=`.
    fn single_or_paired(&mut self, single: TokenKind, paired: Option<TokenKind>) -> Token {
        let start = self.position;
        let kind = match paired {
            Some(kind) if self.peek_char() == Some(b'=') => {
                self.read_char();
                kind
            }
            _ => single,
        };
        self.read_char();
        MK_TOKEN!(kind, String::from_utf8_lossy(&self.input[start..self.position]))
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => Token::eof(),
            Some(b'=') => self.single_or_paired(TokenKind::Assign, Some(TokenKind::Eq)),
            Some(b'!') => self.single_or_paired(TokenKind::Bang, Some(TokenKind::NotEq)),
            Some(b'+') => self.single_or_paired(TokenKind::Plus, None),
            Some(b'-') => self.single_or_paired(TokenKind::Minus, None),
            Some(b'*') => self.single_or_paired(TokenKind::Asterisk, None),
            Some(b'/') => self.single_or_paired(TokenKind::Slash, None),
            Some(b'<') => self.single_or_paired(TokenKind::Lt, None),
            Some(b'>') => self.single_or_paired(TokenKind::Gt, None),
            Some(b',') => self.single_or_paired(TokenKind::Comma, None),
            Some(b';') => self.single_or_paired(TokenKind::Semicolon, None),
            Some(b'(') => self.single_or_paired(TokenKind::LParen, None),
            Some(b')') => self.single_or_paired(TokenKind::RParen, None),
            Some(b'{') => self.single_or_paired(TokenKind::LBrace, None),
            Some(b'}') => self.single_or_paired(TokenKind::RBrace, None),
            Some(ch) if is_letter(ch) => {
                let literal = self.read_while(is_letter);
                MK_TOKEN!(lookup_ident(&literal), literal)
            }
            Some(ch) if is_digit(ch) => MK_TOKEN!(TokenKind::Int, self.read_while(is_digit)),
            Some(ch) => {
                self.read_char();
                MK_TOKEN!(TokenKind::Illegal, char::from(ch))
            }
        };

        trace!(kind = %token.kind, literal = %token.literal, "token");
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Tokenizes the whole of `source`, including the trailing `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
