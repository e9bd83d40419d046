/// Interpreter context, grammar selection and the program entry point.
///
/// Holds the per-pass state (token cursor, symbol table, output buffer) and
/// the shared result type.
pub mod core;

/// Full-grammar expression productions.
///
/// Parses and evaluates arithmetic (`aexpr`, `term`, `factor`) and comparison
/// (`bexpr`) expressions in one step, without building a syntax tree.
pub mod expression;

/// Full-grammar statements.
///
/// Declarations, assignment, `print`, `if/else` and `while/do`, each gated by
/// the execution flag.
pub mod statement;

/// Brace-delimited blocks.
///
/// Parses in-place statement lists and locates block slices for loop replay.
pub mod block;

/// The arithmetic-only grammar.
///
/// Assignment and `print` over `+ - *` with equal `+`/`*` precedence, read
/// through the same context as the full grammar.
pub mod arithmetic;

/// Token-level helpers shared by the productions.
pub mod utils;
