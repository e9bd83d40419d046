use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Context, ParseResult},
        stream::Cursor,
    },
};

impl Context<'_> {
    /// Parses a brace-delimited statement list in place.
    ///
    /// Statements are parsed until the closing `}`; running out of tokens
    /// first is an end-of-input error raised by the statement parser.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_braced_statements(&mut self,
                                                                  execute: bool)
                                                                  -> ParseResult<()> {
        self.expect(&Token::LBrace, "'{'")?;
        while self.peek() != Some(&Token::RBrace) {
            self.parse_statement(execute)?;
        }
        self.expect(&Token::RBrace, "'}'")
    }

    /// Consumes a `{` and returns the body up to its matching `}` as a slice.
    ///
    /// The returned cursor spans the tokens strictly between the braces. The
    /// context's own cursor is left just after the `{`.
    ///
    /// # Errors
    /// - `UnexpectedToken`/`UnexpectedEndOfInput` if the next token is not `{`.
    /// - `UnbalancedBraces` if no matching `}` exists before the bound.
    pub(in crate::interpreter::parser) fn parse_block_slice(&mut self) -> ParseResult<Cursor> {
        let open = self.cursor.pos;
        self.expect(&Token::LBrace, "'{'")?;

        let close = self.tokens()
                        .matching_brace(self.cursor)
                        .ok_or(ParseError::UnbalancedBraces { position: open })?;

        Ok(Cursor { pos: self.cursor.pos,
                    end: close, })
    }

    /// Runs every statement of a block slice, then returns to the outer
    /// position.
    ///
    /// The slice is a self-contained sub-program: its bound acts as the end of
    /// input, so a statement that needs tokens past it fails.
    pub fn run_block(&mut self, body: Cursor, execute: bool) -> ParseResult<()> {
        let outer = std::mem::replace(&mut self.cursor, body);
        while !self.cursor.is_at_end() {
            self.parse_statement(execute)?;
        }
        self.cursor = outer;
        Ok(())
    }
}
