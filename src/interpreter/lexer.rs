use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in a formula.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexicalError)]
pub enum Token {
    /// Numeric literal tokens with a decimal point, such as `3.14` or `5.`.
    /// Integer literals beyond `i64` are read as reals too.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; function or constant names such as `sin` or `π`,
    /// and the root glyphs `√`, `n√` and `ⁿ√`.
    #[regex(r"[a-zA-Z_π][a-zA-Z0-9_π]*", |lex| lex.slice().to_string())]
    #[token("√", |lex| lex.slice().to_string())]
    #[token("n√", |lex| lex.slice().to_string())]
    #[token("ⁿ√", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by the lexer itself;
    /// [`tokenize`] appends exactly one.
    End,
}

/// Failures the lexer can report for a single token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// An integer literal that does not fit an `i64`.
    IntegerOutOfRange,
    /// A literal too large for a finite `f64`.
    LiteralTooLarge,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::DoubleStar => write!(f, "**"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => write!(f, " "),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Splits a formula into tokens paired with their character offsets.
///
/// The returned sequence always ends with exactly one [`Token::End`], placed at
/// the offset just past the last character.
///
/// # Errors
/// - `ParseError::UnexpectedCharacter` for text that starts no token.
/// - `ParseError::LiteralTooLarge` for a literal beyond the `f64` range.
///
/// # Example
/// ```
/// use kalkulacka::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Identifier("x".to_string()), 5),
///                 (Token::End, 6)]);
///
/// let tokens = tokenize("100000000000000000000").unwrap();
/// assert_eq!(tokens[0], (Token::Real(1e20), 0));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = char_offset(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexicalError::IntegerOutOfRange) => match real_literal(lexer.slice()) {
                Some(value) => tokens.push((Token::Real(value), position)),
                None => return Err(ParseError::LiteralTooLarge { position }),
            },
            Err(LexicalError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { position });
            },
            Err(LexicalError::UnexpectedCharacter) => {
                return Err(ParseError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                             position });
            },
        }
    }

    tokens.push((Token::End, source.chars().count()));
    Ok(tokens)
}

/// Converts a byte offset reported by the lexer into a character offset.
fn char_offset(source: &str, byte: usize) -> usize {
    source.get(..byte).map_or(byte, |prefix| prefix.chars().count())
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed floating-point value if successful.
/// - `Err(LexicalError::LiteralTooLarge)`: If the value is not finite.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexicalError> {
    real_literal(lex.slice()).ok_or(LexicalError::LiteralTooLarge)
}

/// Reads digits as a finite `f64`.
fn real_literal(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if successful.
/// - `Err(LexicalError::IntegerOutOfRange)`: If the digits do not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexicalError> {
    lex.slice()
       .parse()
       .map_err(|_| LexicalError::IntegerOutOfRange)
}
