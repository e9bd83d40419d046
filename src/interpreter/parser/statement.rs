use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Context, ParseResult},
        stream::Cursor,
    },
};

impl Context<'_> {
    /// Parses a full-grammar program: all declarations, then all statements.
    ///
    /// Parsing stops at the first token that cannot start a statement; the
    /// caller reports anything left over. A declaration after a statement is
    /// therefore a trailing-token error.
    pub(in crate::interpreter::parser) fn parse_full_program(&mut self,
                                                             execute: bool)
                                                             -> ParseResult<()> {
        while let Some(Token::Integer) = self.peek() {
            self.parse_declaration()?;
        }
        while matches!(self.peek(),
                       Some(Token::Identifier(_) | Token::Print | Token::While | Token::If))
        {
            self.parse_statement(execute)?;
        }
        Ok(())
    }

    /// Parses a declaration and adds the variable with value 0.
    ///
    /// Declarations are recorded in both passes because the validate pass
    /// checks every later use against them. A repeated declaration resets the
    /// variable to 0.
    ///
    /// Grammar: `declaration := "integer" identifier ";"`
    fn parse_declaration(&mut self) -> ParseResult<()> {
        self.expect(&Token::Integer, "'integer'")?;
        let (name, _) = self.parse_identifier()?;
        self.expect(&Token::Semicolon, "';'")?;
        self.symbols.declare(name);
        Ok(())
    }

    /// Parses a single statement and, if `execute` is set, performs it.
    ///
    /// A statement may be one of:
    /// - an assignment (`x = aexpr ;`),
    /// - a print (`print aexpr ;`),
    /// - an `if ( bexpr ) { ... } else { ... } ;`,
    /// - a `while ( bexpr ) do { ... } ;`.
    ///
    /// # Errors
    /// Any other leading token is an unexpected-token error.
    pub fn parse_statement(&mut self, execute: bool) -> ParseResult<()> {
        match self.peek() {
            Some(Token::Identifier(_)) => self.parse_assignment(execute),
            Some(Token::Print) => self.parse_print(execute),
            Some(Token::If) => self.parse_if(execute),
            Some(Token::While) => self.parse_while(execute),
            _ => Err(self.unexpected("statement")),
        }
    }

    fn parse_assignment(&mut self, execute: bool) -> ParseResult<()> {
        let (name, position) = self.parse_identifier()?;
        if !self.symbols.contains(name) {
            return Err(ParseError::UndeclaredVariable { name: name.to_string(),
                                                        position });
        }
        self.expect(&Token::Equals, "'='")?;
        let value = self.parse_aexpr()?;
        self.expect(&Token::Semicolon, "';'")?;

        if execute {
            self.symbols.assign(name, value);
        }
        Ok(())
    }

    fn parse_print(&mut self, execute: bool) -> ParseResult<()> {
        self.expect(&Token::Print, "'print'")?;
        let value = self.parse_aexpr()?;
        self.expect(&Token::Semicolon, "';'")?;

        if execute {
            self.output.push(value);
        }
        Ok(())
    }

    /// Parses an `if/else` statement.
    ///
    /// The condition is evaluated once. Both branches are always parsed; the
    /// `then` branch runs with `execute && condition` and the `else` branch
    /// with `execute && !condition`, so the branch not taken is only
    /// syntax-checked.
    ///
    /// Grammar:
    /// ```text
    ///     if := "if" "(" bexpr ")" "{" statement* "}" "else" "{" statement* "}" ";"
    /// ```
    fn parse_if(&mut self, execute: bool) -> ParseResult<()> {
        self.expect(&Token::If, "'if'")?;
        self.expect(&Token::LParen, "'('")?;
        let condition = self.parse_bexpr()?;
        self.expect(&Token::RParen, "')'")?;

        self.parse_braced_statements(execute && condition)?;
        self.expect(&Token::Else, "'else'")?;
        self.parse_braced_statements(execute && !condition)?;

        self.expect(&Token::Semicolon, "';'")
    }

    /// Parses a `while/do` statement.
    ///
    /// The header is parsed once, then the body is located by brace matching
    /// and kept as a [`Cursor`] slice of the stream. When `execute` is unset
    /// the body is syntax-checked exactly once and never looped. Otherwise the
    /// loop is replayed by [`Context::repeat_while`] after the trailing `;`.
    ///
    /// Grammar:
    /// ```text
    ///     while := "while" "(" bexpr ")" "do" "{" statement* "}" ";"
    /// ```
    fn parse_while(&mut self, execute: bool) -> ParseResult<()> {
        self.expect(&Token::While, "'while'")?;
        self.expect(&Token::LParen, "'('")?;
        let condition_start = self.cursor.pos;
        self.parse_bexpr()?;
        self.expect(&Token::RParen, "')'")?;
        self.expect(&Token::Do, "'do'")?;

        let body = self.parse_block_slice()?;
        if !execute {
            self.run_block(body, false)?;
        }

        self.cursor.pos = body.end + 1;
        self.expect(&Token::Semicolon, "';'")?;

        if execute {
            self.repeat_while(condition_start, body)?;
        }
        Ok(())
    }

    /// Runs a loop whose header starts at `condition_start`.
    ///
    /// Every iteration rewinds to the condition, re-evaluates it against the
    /// current symbol table and, while it holds, runs `body` once. When the
    /// condition fails the context is rolled back to the last committed
    /// checkpoint: the cursor resumes after the loop's `;` and the symbol
    /// table is exactly what the last completed iteration left. An error in
    /// the body aborts immediately. There is no iteration limit.
    fn repeat_while(&mut self, condition_start: usize, body: Cursor) -> ParseResult<()> {
        let mut committed = self.checkpoint();
        let mut iteration = 0usize;

        loop {
            self.cursor = Cursor { pos: condition_start,
                                   end: committed.cursor.end, };
            if !self.parse_bexpr()? {
                trace!(iterations = iteration, "while condition failed");
                self.restore(committed);
                return Ok(());
            }

            iteration += 1;
            trace!(iteration, "while condition held");

            self.run_block(body, true)?;
            committed.symbols = self.symbols.clone();
        }
    }
}
