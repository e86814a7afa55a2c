use std::iter::Peekable;

use crate::{
    ast::AstNode,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical, utils::parse_identifier},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token sequence into one AST root.
///
/// The sequence must be terminated by [`Token::Eof`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). A successful parse
/// consumes every token before the sentinel; anything left over is rejected.
///
/// # Errors
/// The first syntax error encountered; there is no recovery.
///
/// # Examples
/// ```
/// use rill::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1 2").unwrap();
/// let err = parse(&tokens).unwrap_err();
/// assert!(err.to_string().starts_with("Invalid Syntax"));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<AstNode> {
    let mut tokens = tokens.iter().peekable();
    let expression = parse_expression(&mut tokens)?;

    match tokens.peek() {
        Some(Token::Eof) | None => Ok(expression),
        Some(_) => Err(SyntaxError::ExpectedOperator),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. A `var` binding is itself
/// an expression, so it can appear anywhere an expression is expected; the
/// whole form evaluates to the bound value. Otherwise parsing begins at the
/// lowest-precedence level, the logical connectives, and descends through the
/// precedence hierarchy.
///
/// Grammar:
/// ```text
///     expr := "var" IDENTIFIER "=" expr
///           | logical
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Var) = tokens.peek() {
        tokens.next();

        let name = parse_identifier(tokens)?;

        match tokens.next() {
            Some(Token::Equals) => {},
            _ => return Err(SyntaxError::ExpectedEquals),
        }

        let value = parse_expression(tokens)?;

        return Ok(AstNode::VarAssign { name,
                                       value: Box::new(value) });
    }

    parse_logical(tokens)
}
