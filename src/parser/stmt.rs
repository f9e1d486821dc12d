use tracing::debug;

use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::LetStmt,
    },
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses the statement starting at the current token. Returns `None` for
/// statements that are not recognised yet, and for malformed ones (the
/// error is recorded on the parser).
pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    match parser.current_token().kind {
        TokenKind::Let => parse_let_stmt(parser).map(StmtWrapper::new),
        _ => None,
    }
}

/// `let <ident> = <expression>;`
///
/// The expression is skipped up to the semicolon.
pub fn parse_let_stmt(parser: &mut Parser) -> Option<LetStmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier::from_token(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: parse the value expression once prefix/infix parsing lands.
    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::Eof)
    {
        parser.next_token();
    }

    debug!(name = %name.value, "let statement");
    Some(LetStmt {
        token,
        name,
        value: None,
    })
}
