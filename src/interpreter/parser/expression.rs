use crate::interpreter::{
    lexer::Token,
    parser::core::{Context, ParseResult},
};

impl Context<'_> {
    /// Parses and evaluates an arithmetic expression.
    ///
    /// Handles left-associative `+` and `-`, accumulating the running value as
    /// each operator is consumed. No tree is built.
    ///
    /// Grammar: `aexpr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The value of the expression against the current symbol table.
    pub fn parse_aexpr(&mut self) -> ParseResult<i64> {
        let mut value = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value = value.wrapping_add(self.parse_term()?);
                },
                Some(Token::Minus) => {
                    self.advance();
                    value = value.wrapping_sub(self.parse_term()?);
                },
                _ => return Ok(value),
            }
        }
    }

    /// Parses and evaluates a product.
    ///
    /// Grammar: `term := factor ("*" factor)*`
    pub fn parse_term(&mut self) -> ParseResult<i64> {
        let mut value = self.parse_factor()?;
        while self.eat(&Token::Star) {
            value = value.wrapping_mul(self.parse_factor()?);
        }
        Ok(value)
    }

    /// Parses and evaluates a factor.
    ///
    /// An identifier must already be declared and resolves to its current
    /// value. A leading `-` negates the final value of the factor.
    ///
    /// Grammar: `factor := "-"? (number | identifier | "(" aexpr ")")`
    ///
    /// # Errors
    /// - `UndeclaredVariable` for an identifier without a declaration.
    /// - `UnexpectedToken`/`UnexpectedEndOfInput` for anything else.
    pub fn parse_factor(&mut self) -> ParseResult<i64> {
        let negate = self.eat(&Token::Minus);
        let position = self.cursor.pos;

        let value = match self.peek() {
            Some(Token::Number(n)) => {
                self.advance();
                *n
            },
            Some(Token::Identifier(name)) => {
                self.advance();
                self.declared_value(name, position)?
            },
            Some(Token::LParen) => {
                self.advance();
                let value = self.parse_aexpr()?;
                self.expect(&Token::RParen, "')'")?;
                value
            },
            _ => return Err(self.unexpected("number, identifier or '('")),
        };

        Ok(if negate { value.wrapping_neg() } else { value })
    }

    /// Parses and evaluates a comparison between two operands.
    ///
    /// Both operands are read at the moment of evaluation, so re-parsing the
    /// same tokens after the variables change yields the new result. An
    /// operand is a declared variable or a number literal; nested expressions
    /// are not allowed.
    ///
    /// Grammar: `bexpr := operand ("==" | "!=" | "<" | ">") operand`
    pub fn parse_bexpr(&mut self) -> ParseResult<bool> {
        let left = self.parse_comparison_operand()?;

        let op = match self.peek() {
            Some(op @ (Token::EqualEqual | Token::BangEqual | Token::Less | Token::Greater)) => {
                self.advance();
                op
            },
            _ => return Err(self.unexpected("comparison operator")),
        };

        let right = self.parse_comparison_operand()?;

        Ok(match op {
            Token::EqualEqual => left == right,
            Token::BangEqual => left != right,
            Token::Less => left < right,
            _ => left > right,
        })
    }

    /// Grammar: `operand := number | identifier`
    fn parse_comparison_operand(&mut self) -> ParseResult<i64> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.advance();
                Ok(*value)
            },
            Some(Token::Identifier(_)) => {
                let (name, position) = self.parse_identifier()?;
                self.declared_value(name, position)
            },
            _ => Err(self.unexpected("identifier or number")),
        }
    }
}
