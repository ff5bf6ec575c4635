use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, MAX_OPERATORS, ParseContext, ParseResult},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `context`: Parsing state for the current formula.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `opened_at`: Offset of the token that opened the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the formula ends before the closing token (`ExpectedClosingParen`).
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    context: &mut ParseContext,
    parse_item: impl Fn(&mut Peekable<I>, &mut ParseContext) -> ParseResult<T>,
    closing: &Token,
    opened_at: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens, context)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((Token::End, _)) | None => {
                return Err(ParseError::ExpectedClosingParen { position: opened_at });
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or '{closing}', found '{tok}'"),
                                                         position: *position, });
            },
        }
    }
    Ok(items)
}

/// Runs `parse` one nesting level deeper.
///
/// Every recursive cycle of the grammar passes through this function, so the
/// depth it tracks bounds the parser's recursion.
///
/// # Errors
/// `ParseError::NestingTooDeep` if the formula already nests
/// [`MAX_NESTING_DEPTH`] levels deep; otherwise whatever `parse` returns.
pub(in crate::interpreter::parser) fn nested<'a, I, T>(
    tokens: &mut Peekable<I>,
    context: &mut ParseContext,
    parse: impl FnOnce(&mut Peekable<I>, &mut ParseContext) -> ParseResult<T>)
    -> ParseResult<T>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if context.depth >= MAX_NESTING_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position });
    }

    context.depth += 1;
    let result = parse(tokens, context);
    context.depth -= 1;
    result
}

/// Counts one binary operator found at `position` against the formula's
/// operator budget.
///
/// # Errors
/// `ParseError::TooManyOperators` once the formula holds more than
/// [`MAX_OPERATORS`] binary operators.
pub(in crate::interpreter::parser) fn count_operator(context: &mut ParseContext,
                                                     position: usize)
                                                     -> ParseResult<()> {
    if context.operators >= MAX_OPERATORS {
        return Err(ParseError::TooManyOperators { position });
    }
    context.operators += 1;
    Ok(())
}
