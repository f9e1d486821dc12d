use std::{env, io, process::ExitCode};

use monkey::{greeting_name, logging::init_tracing, repl};

fn main() -> ExitCode {
    init_tracing();

    let user = greeting_name(|key| env::var(key).ok());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(error) = repl::start(stdin.lock(), &mut stdout) {
        eprintln!("Error: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
