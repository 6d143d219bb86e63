//! joe: The Joe language tokenizer CLI.
//!
//! Usage:
//!   joe [FILE...]
//!
//! With files, tokenizes each one and prints one token per line. With no
//! arguments, starts the interactive loop: each input line is run through a
//! fresh lexer and its tokens printed; an empty line exits.

use clap::Parser as ClapParser;
use joe_ast::token_kind::TokenKind;
use joe_lexer::Lexer;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "joe", about = "joe - tokenizer for the Joe scripting language", version)]
struct Cli {
    /// Joe source files to tokenize.
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

const PROMPT: &str = "> ";

fn main() {
    let cli = Cli::parse();

    let exit_code = if cli.files.is_empty() {
        run_repl()
    } else {
        run_files(&cli.files)
    };
    process::exit(exit_code);
}

/// Tokenize each file in turn, printing the token stream to stdout and any
/// diagnostics to stderr. Returns a non-zero exit code if any file could not
/// be read or produced error diagnostics.
fn run_files(files: &[String]) -> i32 {
    let mut exit_code = 0;

    for file in files {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("joe: cannot read '{}': {}", file, err);
                exit_code = 1;
                continue;
            }
        };

        let mut lexer = Lexer::new(&source);
        print_tokens(&mut lexer);

        let diagnostics = lexer.take_diagnostics();
        if diagnostics.has_errors() {
            exit_code = 1;
        }
        for diagnostic in diagnostics.into_diagnostics() {
            eprintln!("{}", diagnostic.in_file(file.clone()));
        }
    }

    exit_code
}

/// The interactive loop: one fresh lexer per input line; an empty line exits.
fn run_repl() -> i32 {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return 1;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return 0,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return 0;
        }

        let mut lexer = Lexer::new(line);
        print_tokens(&mut lexer);
        for diagnostic in lexer.take_diagnostics().into_diagnostics() {
            eprintln!("{}", diagnostic);
        }
    }
}

/// Pull tokens until end of input, printing each kind name and literal.
fn print_tokens(lexer: &mut Lexer) {
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfFile {
            break;
        }
        println!("{}", token);
    }
}
