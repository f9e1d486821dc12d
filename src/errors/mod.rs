//! Error types for the parser.
//!
//! Lexing never fails; unrecognised bytes travel as `Illegal` tokens. The
//! parser turns them, and any other token it did not expect, into the
//! errors defined here:
//!
//! - Error structures carrying the offending token
//! - Specific error variants
//! - Error formatting and suggestions

pub mod errors;
