/// Syntax errors.
///
/// Defines every failure that can occur while tokenizing, validating or
/// executing a program line. The language has a single user-visible error
/// kind, so all of them are reported as a syntax error; the variants only
/// exist to make logs and tests precise.
pub mod parse_error;

pub use parse_error::ParseError;
