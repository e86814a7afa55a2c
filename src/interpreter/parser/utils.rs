use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, call argument lists and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either a comma to continue the list, or the specified closing token to end
/// it. An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (`)` or `]`).
///
/// # Returns
/// A vector of parsed items, with the closing token consumed.
///
/// # Errors
/// Returns a `SyntaxError` if an item fails to parse, or if neither a comma
/// nor the closing token follows an item (`Expected ')'` / `Expected ']'`).
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();

    if let Some(token) = tokens.peek()
       && *token == closing
    {
        tokens.next();

        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        match tokens.peek() {
            Some(Token::Comma) => {
                tokens.next();
            },
            Some(token) if *token == closing => {
                tokens.next();
                break;
            },
            _ => return Err(closing_error(closing)),
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// `SyntaxError::ExpectedIdentifier` when the next token is anything else.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Identifier(name)) => Ok(name.clone()),
        _ => Err(SyntaxError::ExpectedIdentifier),
    }
}

/// Consumes one token, requiring it to equal `expected`.
///
/// # Errors
/// Returns `error` when the next token differs or the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    error: SyntaxError)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        _ => Err(error),
    }
}

/// Maps a closing delimiter to its fixed-vocabulary syntax error.
const fn closing_error(closing: &Token) -> SyntaxError {
    match closing {
        Token::CloseBracket => SyntaxError::ExpectedClosingBracket,
        _ => SyntaxError::ExpectedClosingParen,
    }
}
