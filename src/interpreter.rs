/// The lexer module tokenizes program lines for further parsing.
///
/// The lexer reads one line of text and produces a stream of tokens, each
/// corresponding to a keyword, operator, punctuation mark, identifier or
/// number. Malformed words reject the whole line.
///
/// # Responsibilities
/// - Converts the input line into tokens.
/// - Enforces the lowercase-only and ten-character rules on identifiers and
///   numbers.
pub mod lexer;
/// The parser module reads and runs a token stream in one step.
///
/// There is no syntax tree: every grammar production evaluates as it parses,
/// and control flow is implemented by rewinding and replaying slices of the
/// token stream.
///
/// # Responsibilities
/// - Validates the grammar and reports the first syntax error.
/// - Evaluates expressions and performs statements when execution is
///   enabled.
/// - Replays `while` bodies with checkpoint/rollback of the loop state.
pub mod parser;
/// Token storage and cursors over it.
pub mod stream;
/// The flat variable table.
pub mod symbols;
