#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod repl;

/// Picks the name used in the startup greeting from `USER`, then `USERNAME`.
pub fn greeting_name<F>(var: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["USER", "USERNAME"]
        .into_iter()
        .filter_map(|key| var(key))
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| String::from("there"))
}

pub fn display_error<W: Write>(error: &Error, output: &mut W) -> io::Result<()> {
    /*
        Error: UnexpectedToken (Expected `IDENT`, found `=` (`=`))
        -> unexpected token: expected IDENT, received =
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(output, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(output, "-> {}", error)
}
