//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that consumes the lexer's tokens with a
//! one-token lookahead. Only `let` statements are recognised so far; the
//! bound value is not parsed yet.

pub mod parser;
pub mod stmt;
