//! Command line front end: tokenizes a file, standard input, or REPL lines
//! and prints one token per line.
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![warn(unused)]

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bang_lexer::bang::errors::{EngineError, UnterminatedError};
use bang_lexer::bang::token::lexer::{self, Tokenizer};
use bang_lexer::bang::token::tokens::Token;

use std::fs::File;
use std::io::{BufReader, Read, Write, stderr, stdin, stdout};
use std::process::{ExitCode, Termination};

/// Prints a token next to its kind.
fn print_token(token: &Token) {
    println!("{:<12} {token}", token.token_type.kind());
}

/// Tokenizes everything the reader produces, printing each token as soon as
/// it is lexed. The final end-of-input token is printed as well.
fn print_tokens<R: Read>(reader: R) -> Result<(), EngineError> {
    let mut tokenizer = Tokenizer::new(reader);
    for token in tokenizer.tokens() {
        print_token(&token?);
    }
    debug!(tokens = tokenizer.consumed(), "finished tokenizing");
    Ok(())
}

/// Load a file (or standard input, given `-`) and print its tokens.
fn run_file(file: &str) -> Result<(), EngineError> {
    if file == "-" {
        print_tokens(stdin().lock())
    } else {
        print_tokens(BufReader::new(File::open(file)?))
    }
}

/// Run the REPL Prompt.
///
/// A line ending inside a string literal is continued on the next line,
/// so literals may span several lines.
fn run_prompt() -> Result<(), EngineError> {
    let stdin = stdin();
    let mut input = String::new();
    loop {
        print!("{}", if input.is_empty() { "> " } else { ". " });
        stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            break Ok(());
        }

        match lexer::tokenize(input.as_bytes()) {
            Ok(tokens) => tokens.iter().for_each(print_token),
            Err(err) if err.is_unterminated() => {
                debug!(%err, "asking for a continuation line");
                continue;
            }
            Err(err) => eprintln!("{}", EngineError::from(err).display_error()),
        }
        input.clear();
    }
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_unset| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        match self {
            EngineResult::Ok => ExitCode::SUCCESS,
            EngineResult::Err(err) => {
                eprintln!("{}", err.display_error());
                err.into()
            }
        }
    }
}

impl From<Result<(), EngineError>> for EngineResult {
    fn from(value: Result<(), EngineError>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err),
        }
    }
}

/// bang-lexer tokenizes the brace-and-bang notation and prints
/// the resulting tokens, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BangArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<BangCommands>,

    /// Source file to tokenize, `-` for standard input.
    #[arg(required = true)]
    source_file: Option<String>,

    /// Log what the tokenizer does. `RUST_LOG` overrides this.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands in bang-lexer
#[derive(Subcommand, Debug)]
#[command(subcommand_negates_reqs = true)]
enum BangCommands {
    /// run the tokenizer repl.
    Repl,
    /// tokenize the given file and print its tokens.
    Tokenize {
        /// Source file to tokenize, `-` for standard input.
        source_file: String,
    },
}

fn main() -> EngineResult {
    let BangArgs {
        command,
        source_file,
        verbose,
    } = BangArgs::parse();
    init_logging(verbose);

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(BangCommands::Tokenize { source_file }), None) => run_file(&source_file).into(),

        (Some(BangCommands::Repl), None) => run_prompt().into(),

        (Some(_), Some(_))
        | (None, None) => unreachable!("clap verifies this cannot happen."),
    }
}
