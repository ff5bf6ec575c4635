use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseContext, ParseResult, parse_expression},
            utils::{nested, parse_comma_separated},
        },
        value::core::Value,
    },
    kernel::constants,
};

/// Name of the marker that stands for the previous result.
pub const LAST_ANSWER: &str = "ans";

/// Parses a unary minus or a primary expression.
///
/// A minus binds to a single factor, which may itself start with a minus, so
/// `--2` is accepted and `-2^2` is `(-2)^2`.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// An [`Expr::UnaryMinus`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 context: &mut ParseContext)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = nested(tokens, context, parse_unary)?;
        Ok(Expr::UnaryMinus { expr: Box::new(expr),
                              position })
    } else {
        parse_primary(tokens, context)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - the last answer and the constants
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `context`: Parsing state for the current formula.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, context: &mut ParseContext) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => Ok(Expr::Number { value:    Value::Integer(*n),
                                                                 position: *position, }),
        Some((Token::Real(r), position)) => Ok(Expr::Number { value:    Value::Real(*r),
                                                              position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, context, *position),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_function(tokens, context, name, *position)
        },
        Some((Token::End, position)) => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The opening parenthesis has already been consumed. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         context: &mut ParseContext,
                         position: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, context)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses either a call or a bare name.
///
/// A name followed by `(` is a call with zero, one or two arguments. A bare
/// name is resolved immediately: `ans` becomes the last answer, `e`, `pi` and
/// `π` become the kernel constants. Both comparisons ignore case.
///
/// # Returns
/// - [`Expr::Call0`], [`Expr::Call1`] or [`Expr::Call2`] if followed by
///   parentheses,
/// - [`Expr::Number`] for a resolved bare name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a bare name is not known (`UnknownIdentifier`),
/// - a call has more than two arguments (`TooManyArguments`),
/// - argument parsing fails or the closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       context: &mut ParseContext,
                                       name: &str,
                                       position: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LParen, opened_at)) = tokens.peek() {
        let opened_at = *opened_at;
        tokens.next();
        let mut args =
            parse_comma_separated(tokens, context, parse_expression, &Token::RParen, opened_at)?;

        let name = name.to_string();
        return match (args.pop(), args.pop()) {
            (None, _) => Ok(Expr::Call0 { name, position }),
            (Some(argument), None) => Ok(Expr::Call1 { name,
                                                       argument: Box::new(argument),
                                                       position }),
            (Some(second), Some(first)) if args.is_empty() => {
                Ok(Expr::Call2 { name,
                                 first: Box::new(first),
                                 second: Box::new(second),
                                 position })
            },
            _ => Err(ParseError::TooManyArguments { name, position }),
        };
    }

    let value = match name.to_lowercase().as_str() {
        LAST_ANSWER => context.last_answer,
        "e" => Value::Real(constants::e()),
        "pi" | "π" => Value::Real(constants::pi()),
        _ => {
            return Err(ParseError::UnknownIdentifier { name: name.to_string(),
                                                       position });
        },
    };
    Ok(Expr::Number { value, position })
}
