use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        stream::{Cursor, TokenStream},
        symbols::SymbolTable,
    },
};

/// Result type used by every production of the parser.
///
/// An `Err` plays the role of a raised error flag: it is produced once and
/// propagated with `?`, so no production runs (and nothing is mutated) after
/// the first syntax error of a pass.
pub type ParseResult<T> = Result<T, ParseError>;

/// The two grammars a program line can be read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// Declarations, assignment, `print`, `if/else` and `while/do`, with
    /// standard precedence (`*` over `+`/`-`) and comparisons between
    /// declared variables.
    #[default]
    Full,
    /// Assignment and `print` only. `+` and `*` share one precedence level and
    /// apply left to right, while `-` binds tighter than both. Variables need
    /// no declaration and read as 0 until assigned.
    Arithmetic,
}

/// Interpreter state for one pass over one program line.
///
/// Parsing and evaluation are fused: every grammar production is a method
/// that consumes tokens and immediately computes its value against
/// [`Context::symbols`]. Statement methods take an `execute` flag; only when
/// it is `true` may they store into the symbol table or append to
/// [`Context::output`]. A pass with `execute == false` is a pure syntax check.
///
/// ## Usage
///
/// A fresh `Context` is built for each pass of each line, so no state leaks
/// between passes or lines.
///
/// ```
/// use minilang::interpreter::{
///     lexer::tokenize,
///     parser::core::{Context, Grammar},
/// };
///
/// let tokens = tokenize("integer x ; x = 4 ; print x * x ;").unwrap();
///
/// let mut validator = Context::new(&tokens, Grammar::Full);
/// validator.run(false).unwrap();
/// assert!(validator.output.is_empty());
///
/// let mut executor = Context::new(&tokens, Grammar::Full);
/// executor.run(true).unwrap();
/// assert_eq!(executor.output, vec![16]);
/// ```
pub struct Context<'t> {
    tokens:      &'t TokenStream,
    pub(in crate::interpreter::parser) cursor: Cursor,
    grammar:     Grammar,
    /// Declared variables and their current values.
    pub symbols: SymbolTable,
    /// Values printed so far, in execution order.
    pub output:  Vec<i64>,
}

/// Saved loop state: where to resume and the last committed variable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub cursor:  Cursor,
    pub symbols: SymbolTable,
}

impl<'t> Context<'t> {
    /// Creates a context positioned at the first token, with an empty symbol
    /// table and no output.
    #[must_use]
    pub fn new(tokens: &'t TokenStream, grammar: Grammar) -> Self {
        Self { tokens,
               cursor: tokens.cursor(),
               grammar,
               symbols: SymbolTable::new(),
               output: Vec::new() }
    }

    /// Parses (and, if `execute` is set, runs) the whole program.
    ///
    /// Grammar: `program := declaration* statement*` for [`Grammar::Full`] and
    /// `program := statement*` for [`Grammar::Arithmetic`]. The program must
    /// consume every token of the line.
    ///
    /// # Errors
    /// Returns the first syntax error encountered, or
    /// [`ParseError::UnexpectedTrailingTokens`] if input is left over.
    pub fn run(&mut self, execute: bool) -> ParseResult<()> {
        match self.grammar {
            Grammar::Full => self.parse_full_program(execute)?,
            Grammar::Arithmetic => self.parse_arithmetic_program(execute)?,
        }

        match self.peek() {
            Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                                      position: self.cursor.pos, }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Consumes the context and returns the printed values.
    #[must_use]
    pub fn into_output(self) -> Vec<i64> {
        self.output
    }

    /// Captures the current cursor and a copy of the symbol table.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { cursor:  self.cursor,
                     symbols: self.symbols.clone(), }
    }

    /// Rolls the cursor and symbol table back to `checkpoint`.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.cursor;
        self.symbols = checkpoint.symbols;
    }

    /// Returns the next token without consuming it, or `None` at the bound of
    /// the current cursor.
    pub(in crate::interpreter::parser) fn peek(&self) -> Option<&'t Token> {
        self.tokens.peek(self.cursor)
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.cursor.pos += 1;
        Some(token)
    }

    pub(in crate::interpreter::parser) const fn tokens(&self) -> &'t TokenStream {
        self.tokens
    }
}
