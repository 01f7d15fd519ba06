//! exprc demonstration driver.
//!
//! - `exprc tokens [SOURCE] [--file PATH]` - Print one token per line
//! - `exprc tree [SOURCE] [--file PATH]` - Print the in-order rendering and the tree
//!
//! Without a source the built-in demo program is used. Set `RUST_LOG=debug`
//! (or `trace`) to follow the lexer and parser.

use std::{fs::read_to_string, process, rc::Rc, time::Instant};

use clap::{Args, Parser, Subcommand};
use exprc::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
    parser::parser::Parser as ExprParser,
    render_error, Position,
};
use log::info;

const DEMO_SOURCE: &str = "def var myVariabl1 = 10  + 23/  12 && 23 >= 23";

#[derive(Parser)]
#[command(name = "exprc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and parse arithmetic expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input and print every token
    Tokens(InputArgs),
    /// Tokenize and parse the input, then print the expression tree
    Tree(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Source text to process
    source: Option<String>,

    /// Read the source from a file instead
    #[arg(short, long, conflicts_with = "source")]
    file: Option<String>,
}

impl InputArgs {
    /// Returns the file name used in diagnostics and the source text.
    fn load(&self) -> Result<(String, String), Error> {
        match (&self.file, &self.source) {
            (Some(path), _) => read_to_string(path)
                .map(|source| (path.clone(), source))
                .map_err(|err| {
                    Error::new(
                        ErrorImpl::Io {
                            path: path.clone(),
                            message: err.to_string(),
                        },
                        Position(0, Rc::new(path.clone())),
                    )
                }),
            (None, Some(source)) => Ok((String::from("shell"), source.clone())),
            (None, None) => Ok((String::from("demo"), String::from(DEMO_SOURCE))),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(error) = run(cli.command) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Error> {
    let (input, print_tree) = match command {
        Commands::Tokens(input) => (input, false),
        Commands::Tree(input) => (input, true),
    };
    let (file_name, source) = input.load()?;

    let start = Instant::now();
    let mut lexer = Lexer::new(Some(file_name));
    let tokens = lexer.tokenize(source.as_str());
    info!("Tokenized in {:?}", start.elapsed());

    for diagnostic in lexer.diagnostics() {
        eprint!("{}", render_error(diagnostic, &source));
    }

    if !print_tree {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let mut parser = ExprParser::new();
    let ast = parser.parse(tokens);
    info!("Parsed in {:?}", parse_start.elapsed());

    for warning in parser.warnings() {
        eprint!("{}", render_error(warning, &source));
    }

    println!("{}", ast);
    print!("{}", ast.fmt_tree());

    Ok(())
}
