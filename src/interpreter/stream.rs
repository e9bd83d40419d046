use crate::interpreter::lexer::Token;

/// The immutable token sequence of one program line.
///
/// There is no end-of-input token stored in the vector: reading at or past a
/// [`Cursor`]'s bound is the end-of-input condition. Block bodies reuse the
/// same stream through narrower cursors instead of copying tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

/// A position in a [`TokenStream`] together with the bound it may not cross.
///
/// `pos` is the next unconsumed token; `end` is exclusive. A cursor over
/// `[start, end)` is how a block slice is represented, so saving and
/// restoring parser position is a plain copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the next unconsumed token.
    pub pos: usize,
    /// Exclusive upper bound.
    pub end: usize,
}

impl Cursor {
    /// Returns `true` once every token before the bound has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }
}

impl TokenStream {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns a cursor spanning the whole stream.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor { pos: 0,
                 end: self.tokens.len() }
    }

    /// Returns the token at `cursor.pos`, or `None` at the cursor's bound.
    #[must_use]
    pub fn peek(&self, cursor: Cursor) -> Option<&Token> {
        if cursor.is_at_end() {
            None
        } else {
            self.tokens.get(cursor.pos)
        }
    }

    /// Finds the `}` closing a block whose `{` was just consumed.
    ///
    /// Scanning starts at `cursor.pos` with depth 1; every `{` increments and
    /// every `}` decrements the depth. The index of the brace that brings the
    /// depth to 0 is returned. Scanning never crosses `cursor.end`.
    ///
    /// # Returns
    /// `None` if the braces are unbalanced within the cursor's range.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::lexer::tokenize;
    ///
    /// let stream = tokenize("{ { } } ;").unwrap();
    /// let mut cursor = stream.cursor();
    /// cursor.pos = 1;
    /// assert_eq!(stream.matching_brace(cursor), Some(3));
    ///
    /// let stream = tokenize("{ { }").unwrap();
    /// let mut cursor = stream.cursor();
    /// cursor.pos = 1;
    /// assert_eq!(stream.matching_brace(cursor), None);
    /// ```
    #[must_use]
    pub fn matching_brace(&self, cursor: Cursor) -> Option<usize> {
        let end = cursor.end.min(self.tokens.len());
        let mut depth = 1usize;

        for (index, token) in self.tokens[cursor.pos.min(end)..end].iter().enumerate() {
            match token {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(cursor.pos + index);
                    }
                },
                _ => {},
            }
        }

        None
    }
}
