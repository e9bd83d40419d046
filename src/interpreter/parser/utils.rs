use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Context, ParseResult},
    },
};

impl<'t> Context<'t> {
    /// Builds the error for "the next token is not what the grammar needs".
    ///
    /// Yields [`ParseError::UnexpectedToken`] when a token is present and
    /// [`ParseError::UnexpectedEndOfInput`] at the bound of the cursor.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken { found: token.to_string(),
                                                         expected,
                                                         position: self.cursor.pos },
            None => ParseError::UnexpectedEndOfInput { expected,
                                                       position: self.cursor.pos },
        }
    }

    /// Consumes the next token if it equals `expected`.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.cursor.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must equal `expected`.
    ///
    /// # Errors
    /// Returns an unexpected-token or end-of-input error naming `description`.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token,
                                                 description: &'static str)
                                                 -> ParseResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(description))
        }
    }

    /// Consumes an identifier token and returns its name with its position.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self)
                                                           -> ParseResult<(&'t str, usize)> {
        let position = self.cursor.pos;
        match self.peek() {
            Some(Token::Identifier(name)) => {
                self.cursor.pos += 1;
                Ok((name.as_str(), position))
            },
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Reads a declared variable.
    ///
    /// # Errors
    /// Returns [`ParseError::UndeclaredVariable`] if `name` has no
    /// declaration.
    pub(in crate::interpreter::parser) fn declared_value(&self,
                                                         name: &str,
                                                         position: usize)
                                                         -> ParseResult<i64> {
        self.symbols
            .get(name)
            .ok_or_else(|| ParseError::UndeclaredVariable { name: name.to_string(),
                                                            position })
    }
}
