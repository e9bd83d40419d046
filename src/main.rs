use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use minilang::{Grammar, interpret};
use tracing::Level;

/// minilang runs one small imperative program per input line and prints
/// either its output or `Syntax Error!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grammar used to read every program line.
    #[arg(short, long, value_enum, default_value_t = GrammarArg::Full)]
    grammar: GrammarArg,

    /// Reads program lines from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Logs parser decisions to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GrammarArg {
    /// Declarations, if/else and while/do.
    Full,
    /// Assignment and print over `+ - *` only.
    Arithmetic,
}

impl From<GrammarArg> for Grammar {
    fn from(value: GrammarArg) -> Self {
        match value {
            GrammarArg::Full => Self::Full,
            GrammarArg::Arithmetic => Self::Arithmetic,
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_target(false)
                             .with_max_level(level)
                             .init();

    let grammar = args.grammar.into();
    let stdout = io::stdout().lock();

    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|e| {
                                       eprintln!("Failed to read the input file '{}': {e}",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        interpret(BufReader::new(file), stdout, grammar)
    } else {
        interpret(io::stdin().lock(), stdout, grammar)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
