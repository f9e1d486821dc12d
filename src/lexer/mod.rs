//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-wise classification of ASCII source text
//! - Recognition of keywords, identifiers, integers, and operators
//! - Unrecognised bytes, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
