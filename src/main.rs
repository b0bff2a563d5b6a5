// minic: lexer and parser front end for the MiniC language

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};

use minic::parser::lexer::tokenize;
use minic::parser::parse::Parser;
use minic::printer::TreePrinter;

#[derive(ClapParser)]
#[command(name = "minic")]
#[command(about = "Lexer and parser for the MiniC language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print the token stream
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print the syntax tree
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => lex_file(&file),
        Commands::Parse { file } => parse_file(&file),
    }
}

fn lex_file(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let tokens = tokenize(&source)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    for token in &tokens {
        println!(
            "{}:{}:{} {:?} {}",
            path.display(),
            token.pos.line,
            token.pos.column,
            token.kind,
            token.text
        );
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let tokens = tokenize(&source)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    let mut parser = Parser::new(tokens);
    let program = parser
        .parse_program()
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    print!("{}", TreePrinter::render(&program));
    println!("\nParsed {} top-level declarations.", program.decls.len());

    Ok(())
}
