//! # minilang
//!
//! minilang is an interpreter for a tiny line-oriented imperative language.
//! Every input line is an independent program: it is tokenized, checked for
//! syntax errors in a side-effect-free validate pass, and only then executed
//! in a second pass that collects its printed values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::Context},
};
pub use crate::interpreter::parser::core::Grammar;

/// Provides the error type for tokenizing and parsing.
///
/// Every failure of a program line is a syntax error. The error enum keeps
/// the precise cause and position for logging and testing, while users only
/// ever see [`SYNTAX_ERROR`].
///
/// # Responsibilities
/// - Defines one variant per failure mode (bad lexeme, unexpected token,
///   undeclared variable, unbalanced braces, leftover input).
/// - Implements `Display` and `std::error::Error`.
pub mod error;
/// Orchestrates tokenizing, parsing and execution of one line.
///
/// This module ties together the lexer, the token stream, the symbol table
/// and the fused parser/executor.
///
/// # Responsibilities
/// - Converts text into tokens.
/// - Parses and evaluates statements against an explicit per-pass context.
/// - Implements loop replay over token slices.
pub mod interpreter;

/// The line printed for a program that fails to tokenize, validate or run.
pub const SYNTAX_ERROR: &str = "Syntax Error!";

/// Runs one program line and returns its printed values.
///
/// The line is tokenized once. A validate pass then parses the whole program
/// with execution disabled against a fresh symbol table; only if it succeeds
/// is a second, executing pass run from the start against another fresh
/// table. Nothing from the validate pass is visible in the result.
///
/// # Errors
/// Returns the first [`ParseError`] of either pass.
///
/// # Examples
/// ```
/// use minilang::{Grammar, run_line};
///
/// let output = run_line("integer x ; x = 3 ; print x ;", Grammar::Full).unwrap();
/// assert_eq!(output, vec![3]);
///
/// // `x` is never declared.
/// assert!(run_line("x = 1 ;", Grammar::Full).is_err());
/// ```
pub fn run_line(line: &str, grammar: Grammar) -> Result<Vec<i64>, ParseError> {
    let tokens = tokenize(line).inspect_err(|error| debug!(%error, "line rejected by tokenizer"))?;

    let mut validator = Context::new(&tokens, grammar);
    validator.run(false)
             .inspect_err(|error| debug!(pass = "validate", %error, "syntax error"))?;

    let mut executor = Context::new(&tokens, grammar);
    executor.run(true)
            .inspect_err(|error| debug!(pass = "execute", %error, "syntax error"))?;

    Ok(executor.into_output())
}

/// Runs one program line and renders the line to print for it.
///
/// # Returns
/// [`SYNTAX_ERROR`] on failure, otherwise the printed values separated by
/// single spaces (an empty string if nothing was printed).
///
/// # Examples
/// ```
/// use minilang::{Grammar, SYNTAX_ERROR, interpret_line};
///
/// assert_eq!(interpret_line("print 1 ; print 2 ;", Grammar::Full), "1 2");
/// assert_eq!(interpret_line("integer x ;", Grammar::Full), "");
/// assert_eq!(interpret_line("print ;", Grammar::Full), SYNTAX_ERROR);
/// ```
#[must_use]
pub fn interpret_line(line: &str, grammar: Grammar) -> String {
    match run_line(line, grammar) {
        Ok(values) => values.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(" "),
        Err(_) => SYNTAX_ERROR.to_string(),
    }
}

/// Reads program lines from `input` and writes one result line per program.
///
/// Processing stops at the first blank (whitespace-only) line or at the end
/// of input. Each line is run independently with its own symbol table.
///
/// # Returns
/// The number of program lines processed.
///
/// # Errors
/// Propagates I/O errors from reading `input` or writing `output`.
///
/// # Examples
/// ```
/// use minilang::{Grammar, interpret};
///
/// let input = "print 7 ;\nprint ;\n\nprint 8 ;\n";
/// let mut output = Vec::new();
///
/// let count = interpret(input.as_bytes(), &mut output, Grammar::Full).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(String::from_utf8(output).unwrap(), "7\nSyntax Error!\n");
/// ```
pub fn interpret<R: BufRead, W: Write>(input: R,
                                       mut output: W,
                                       grammar: Grammar)
                                       -> io::Result<usize> {
    let mut count = 0;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        count += 1;
        trace!(line = count, program = %line, "running program line");
        writeln!(output, "{}", interpret_line(&line, grammar))?;
    }

    output.flush()?;
    Ok(count)
}
