use std::io::{self, BufRead, Write};

use tracing::info;

use crate::{display_error, lexer::lexer::Lexer, parser::parser::Parser};

pub const PROMPT: &str = ">> ";

/// Reads lines from `input` and writes every token of each line to
/// `output`, one per line, followed by any parse errors, until `input` is
/// exhausted. Lines are raw bytes; invalid UTF-8 lexes as `Illegal`.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    info!("repl started");
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("input exhausted");
            return Ok(());
        }
        let line = strip_line_ending(&buf);

        for token in Lexer::from_bytes(line) {
            writeln!(output, "{}", token)?;
        }

        let mut parser = Parser::new(Lexer::from_bytes(line));
        parser.parse_program();
        for error in parser.errors() {
            display_error(error, output)?;
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
