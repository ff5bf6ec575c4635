use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseContext, ParseResult},
            unary::parse_unary,
            utils::{count_operator, nested},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
///
/// # Errors
/// `ParseError::TooManyOperators` once the formula exceeds
/// [`MAX_OPERATORS`](crate::interpreter::parser::core::MAX_OPERATORS).
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             context: &mut ParseContext)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, context)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let position = *position;
        count_operator(context, position)?;
        tokens.next();
        let right = parse_multiplicative(tokens, context)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   context: &mut ParseContext)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_power(tokens, context)?;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let position = *position;
        count_operator(context, position)?;
        tokens.next();
        let right = parse_power(tokens, context)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Both `^` and `**` denote it.
///
/// The rule is: `power := factor (("^" | "**") power)?`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// An exponentiation expression tree.
///
/// # Errors
/// `ParseError::NestingTooDeep` once the factors nest beyond
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                          context: &mut ParseContext)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = nested(tokens, context, parse_unary)?;

    if let Some((token, position)) = tokens.peek()
       && let Some(BinaryOperator::Pow) = token_to_binary_operator(token)
    {
        let position = *position;
        count_operator(context, position)?;
        tokens.next();
        let exponent = nested(tokens, context, parse_power)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   position });
    }

    Ok(base)
}

/// Maps a token to the binary operator it denotes, if any.
///
/// # Example
/// ```
/// use kalkulacka::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret | Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
