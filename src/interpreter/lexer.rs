use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::stream::TokenStream};

/// Longest identifier or number literal the language accepts.
pub const MAX_WORD_LEN: usize = 10;

/// Represents a lexical token in a program line.
///
/// Keywords, operators and punctuation are exact literals. Any other run of
/// word characters is classified as an identifier (lowercase letters only), a
/// number (digits only), or rejected as [`Token::Malformed`]; both literal
/// kinds are capped at [`MAX_WORD_LEN`] characters.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number, priority = 3)]
    Number(i64),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-z]+", parse_identifier, priority = 3)]
    Identifier(String),
    /// A word mixing letters and digits, uppercase letters or underscores.
    /// Never part of a valid token stream.
    #[regex(r"[A-Za-z0-9_]+", priority = 1)]
    Malformed,
    /// `integer`
    #[token("integer")]
    Integer,
    /// `print`
    #[token("print")]
    Print,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
}

impl Token {
    /// Returns the variable name this token spells in the arithmetic grammar.
    ///
    /// That grammar has no declarations or control flow, so every keyword of
    /// the full grammar except `print` is an ordinary name there.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::While.arithmetic_name(), Some("while"));
    /// assert_eq!(Token::Identifier("x".into()).arithmetic_name(), Some("x"));
    /// assert_eq!(Token::Print.arithmetic_name(), None);
    /// ```
    #[must_use]
    pub fn arithmetic_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Integer => Some("integer"),
            Self::While => Some("while"),
            Self::Do => Some("do"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Malformed => f.write_str("<malformed>"),
            Self::Integer => f.write_str("integer"),
            Self::Print => f.write_str("print"),
            Self::While => f.write_str("while"),
            Self::Do => f.write_str("do"),
            Self::If => f.write_str("if"),
            Self::Else => f.write_str("else"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::EqualEqual => f.write_str("=="),
            Self::BangEqual => f.write_str("!="),
            Self::Less => f.write_str("<"),
            Self::Greater => f.write_str(">"),
            Self::Equals => f.write_str("="),
            Self::Semicolon => f.write_str(";"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
        }
    }
}

/// Splits one program line into a [`TokenStream`].
///
/// Tokenizing never panics. The first piece of text that is not a valid token
/// (an over-long or malformed word, or a stray character such as `!` or `$`)
/// rejects the whole line, and the parser is never run on it.
///
/// # Errors
/// Returns [`ParseError::InvalidLexeme`] with the offending text and its byte
/// column.
///
/// # Example
/// ```
/// use minilang::interpreter::lexer::{Token, tokenize};
///
/// let stream = tokenize("print x;").unwrap();
/// assert_eq!(stream.as_slice(),
///            &[Token::Print, Token::Identifier("x".into()), Token::Semicolon]);
///
/// assert!(tokenize("print abcdefghijk ;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<TokenStream, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Malformed) | Err(()) => {
                return Err(ParseError::InvalidLexeme { lexeme: lexer.slice().to_string(),
                                                       column: lexer.span().start, });
            },
            Ok(tok) => tokens.push(tok),
        }
    }

    Ok(TokenStream::new(tokens))
}

/// Parses a number literal of at most [`MAX_WORD_LEN`] digits.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    if slice.len() > MAX_WORD_LEN {
        return None;
    }
    slice.parse().ok()
}

/// Accepts an identifier of at most [`MAX_WORD_LEN`] lowercase letters.
fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    (slice.len() <= MAX_WORD_LEN).then(|| slice.to_string())
}
