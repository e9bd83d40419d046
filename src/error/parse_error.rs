#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a program line.
///
/// Positions are token indices into the line's token stream, except for
/// [`ParseError::InvalidLexeme`], which carries the byte column of the
/// offending text since no token exists for it.
pub enum ParseError {
    /// The tokenizer found text that is not a keyword, operator, punctuation,
    /// identifier or number.
    InvalidLexeme {
        /// The rejected source text.
        lexeme: String,
        /// Byte offset of the lexeme in the line.
        column: usize,
    },
    /// Found a token the grammar does not allow here.
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Index of the token in the stream.
        position: usize,
    },
    /// Reached the end of input (or the end of a block) unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// Index one past the last readable token.
        position: usize,
    },
    /// A variable was read or written before its `integer` declaration.
    UndeclaredVariable {
        /// The name of the variable.
        name:     String,
        /// Index of the token in the stream.
        position: usize,
    },
    /// An opening `{` has no matching `}`.
    UnbalancedBraces {
        /// Index of the opening brace.
        position: usize,
    },
    /// Tokens remain after the program's last statement.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Index of the token in the stream.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLexeme { lexeme, column } => {
                write!(f, "Error at column {column}: Invalid lexeme '{lexeme}'.")
            },
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => write!(f,
                                                          "Error at token {position}: Unexpected token '{found}', expected {expected}."),
            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at token {position}: Unexpected end of input, expected {expected}."),
            Self::UndeclaredVariable { name, position } => write!(f,
                                                                  "Error at token {position}: Variable '{name}' is not declared."),
            Self::UnbalancedBraces { position } => write!(f,
                                                          "Error at token {position}: Opening brace has no matching '}}'."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at token {position}: Extra tokens after program: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
