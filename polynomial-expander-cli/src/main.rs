use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::info;
use polynomial_expander::interpreter::lexer::tokenize_reader;
use polynomial_expander::interpreter::token::PositionedToken;
use polynomial_expander::interpreter::{convert, format_tokens, tokens_to_string, Notation};
use std::fs::File;
use std::io;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Manipulates algebraic expressions over integers and named variables
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an algebraic expression
    ///
    /// Formatting a large algebraic expression is usually a first step to
    /// discover its properties and possible simplifications.
    Format {
        /// Use postfix (RPN) format
        #[clap(long)]
        postfix: bool,

        /// File containing the expression, standard input is read if omitted
        file: Option<PathBuf>,
    },
    /// Expand an algebraic expression, removing all brackets
    Expand {
        /// File containing the expression, standard input is read if omitted
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let output = run(args.command)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Format { postfix, file } => {
            let notation = if postfix {
                Notation::Postfix
            } else {
                Notation::Infix
            };
            let infix_tokens = read_tokens(file.as_deref())?;
            let tokens = format_tokens(infix_tokens, notation)
                .context("could not format expression")?;
            Ok(tokens_to_string(&tokens))
        }
        Command::Expand { file } => {
            let infix_tokens = read_tokens(file.as_deref())?;
            let polynomial = convert(infix_tokens).context("could not expand expression")?;
            Ok(polynomial.to_string())
        }
    }
}

fn read_tokens(file: Option<&Path>) -> Result<Vec<PositionedToken>> {
    let reader = open_input(file)?;
    tokenize_reader(reader).context("could not parse expression")
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) => {
            info!("reading expression from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("reading expression from standard input");
            Ok(Box::new(io::stdin()))
        }
    }
}
