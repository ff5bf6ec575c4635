use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive, value::core::Value},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested factors (parentheses, call arguments, unary
/// minus, exponents) a formula may contain.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum number of binary operators in one formula.
///
/// Operator chains such as `1+1+…+1` are parsed in a loop but still build a
/// tree as deep as the chain is long.
pub const MAX_OPERATORS: usize = 1_000;

/// State shared by every parsing function for the duration of one formula.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Value substituted for the `ans` marker.
    pub last_answer: Value,
    /// Number of factors currently being parsed inside one another.
    pub depth:       usize,
    /// Number of binary operators consumed so far.
    pub operators:   usize,
}

impl ParseContext {
    #[must_use]
    pub const fn new(last_answer: Value) -> Self {
        Self { last_answer,
               depth: 0,
               operators: 0 }
    }
}

/// Parses a complete formula.
///
/// The token slice must end with [`Token::End`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). Any token left over
/// after a complete expression is an error.
///
/// # Parameters
/// - `tokens`: The token stream with character offsets.
/// - `last_answer`: The value the `ans` marker resolves to.
///
/// # Returns
/// The root node of the expression tree.
///
/// # Errors
/// Every structural problem of the formula as a `ParseError`.
///
/// # Example
/// ```
/// use kalkulacka::interpreter::{
///     lexer::tokenize,
///     parser::core::parse_formula,
///     value::core::Value,
/// };
///
/// let tokens = tokenize("2 + ans * 3").unwrap();
/// let expr = parse_formula(&tokens, Value::Integer(4)).unwrap();
///
/// assert_eq!(expr.to_string(), "(2 + (4 * 3))");
/// ```
pub fn parse_formula(tokens: &[(Token, usize)], last_answer: Value) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let mut context = ParseContext::new(last_answer);

    let expr = parse_expression(&mut iter, &mut context)?;

    match iter.next() {
        Some((Token::End, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                            position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               context: &mut ParseContext)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, context)
}
