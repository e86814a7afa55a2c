use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use rill::{evaluate, interpreter::environment::Environment};

/// rill is a small dynamic expression language with numbers, strings, lists
/// and first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to evaluate; the interactive prompt starts when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

/// Evaluates a whole file as one expression against a fresh root environment.
///
/// The rendered result (when there is one) goes to standard output. Any
/// diagnostic also goes to standard output, and the process exits non-zero.
fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                                             eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                       path.display());
                                             process::exit(1);
                                         });

    let env = Environment::root();

    match evaluate(&source, &env) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            println!("{e}");
            process::exit(1);
        },
    }
}

/// Reads one expression per line and evaluates it against a shared root
/// environment, so bindings persist for the whole session.
///
/// An empty line, any line containing `exit`, or end of input terminates the
/// session with exit code 0. Diagnostics are printed and the prompt continues.
fn run_repl() {
    println!("rill {}", env!("CARGO_PKG_VERSION"));

    let env = Environment::root();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            process::exit(1);
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => process::exit(0),
            Ok(_) => {},
            Err(e) => {
                eprintln!("Something went wrong while reading input: {e}");
                process::exit(1);
            },
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if input.is_empty() || input.contains("exit") {
            process::exit(0);
        }

        match evaluate(input, &env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => println!("{e}"),
        }
    }
}
