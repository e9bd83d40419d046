use crate::interpreter::{
    lexer::Token,
    parser::core::{Context, ParseResult},
};

impl<'t> Context<'t> {
    /// Parses an arithmetic-grammar program: statements until the input ends.
    pub(in crate::interpreter::parser) fn parse_arithmetic_program(&mut self,
                                                                   execute: bool)
                                                                   -> ParseResult<()> {
        while self.peek().is_some() {
            self.parse_arithmetic_statement(execute)?;
        }
        Ok(())
    }

    /// Parses an assignment or a print in the arithmetic grammar.
    ///
    /// `print` takes a single variable rather than an expression. Assigning
    /// creates the variable; printing an unknown variable prints 0.
    ///
    /// Grammar: `statement := name "=" sum ";" | "print" name ";"`
    fn parse_arithmetic_statement(&mut self, execute: bool) -> ParseResult<()> {
        if self.eat(&Token::Print) {
            let name = self.parse_arithmetic_name()?;
            self.expect(&Token::Semicolon, "';'")?;
            if execute {
                self.output.push(self.symbols.get_or_zero(name));
            }
            return Ok(());
        }

        let name = self.parse_arithmetic_name()?;
        self.expect(&Token::Equals, "'='")?;
        let value = self.parse_sum()?;
        self.expect(&Token::Semicolon, "';'")?;
        if execute {
            self.symbols.set(name, value);
        }
        Ok(())
    }

    /// Parses and evaluates `+` and `*`, which share one precedence level and
    /// apply strictly left to right: `1 + 2 * 3` is `(1 + 2) * 3`.
    ///
    /// Grammar: `sum := difference (("+" | "*") difference)*`
    ///
    /// # Example
    /// ```
    /// use minilang::{Grammar, run_line};
    ///
    /// let output = run_line("x = 1 + 2 * 3 ; print x ;", Grammar::Arithmetic).unwrap();
    /// assert_eq!(output, vec![9]);
    /// ```
    pub fn parse_sum(&mut self) -> ParseResult<i64> {
        let mut value = self.parse_difference()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value = value.wrapping_add(self.parse_difference()?);
                },
                Some(Token::Star) => {
                    self.advance();
                    value = value.wrapping_mul(self.parse_difference()?);
                },
                _ => return Ok(value),
            }
        }
    }

    /// Parses and evaluates a subtraction chain, which binds tighter than
    /// [`Context::parse_sum`]'s operators.
    ///
    /// Grammar: `difference := operand ("-" operand)*`
    pub fn parse_difference(&mut self) -> ParseResult<i64> {
        let mut value = self.parse_operand()?;
        while self.eat(&Token::Minus) {
            value = value.wrapping_sub(self.parse_operand()?);
        }
        Ok(value)
    }

    /// Parses and evaluates an operand; unknown names read as 0.
    ///
    /// Grammar: `operand := "-"? (number | name | "(" sum ")")`
    pub fn parse_operand(&mut self) -> ParseResult<i64> {
        let negate = self.eat(&Token::Minus);

        let value = match self.peek() {
            Some(Token::Number(n)) => {
                self.advance();
                *n
            },
            Some(Token::LParen) => {
                self.advance();
                let value = self.parse_sum()?;
                self.expect(&Token::RParen, "')'")?;
                value
            },
            Some(token) if token.arithmetic_name().is_some() => {
                let name = self.parse_arithmetic_name()?;
                self.symbols.get_or_zero(name)
            },
            _ => return Err(self.unexpected("number, name or '('")),
        };

        Ok(if negate { value.wrapping_neg() } else { value })
    }

    /// Consumes a variable name of the arithmetic grammar.
    fn parse_arithmetic_name(&mut self) -> ParseResult<&'t str> {
        match self.peek().and_then(Token::arithmetic_name) {
            Some(name) => {
                self.cursor.pos += 1;
                Ok(name)
            },
            None => Err(self.unexpected("variable name")),
        }
    }
}
