use std::iter::Peekable;

use crate::{
    ast::{AstNode, BinaryOperator, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            unary::parse_factor,
        },
    },
};

/// Parses the logical connectives `and` and `or`.
///
/// Handles left-associative chains at the lowest precedence level.
///
/// Grammar: `logical := comparison (("and" | "or") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// A binary expression tree combining comparison-level nodes.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            tokens.next();
            let right = parse_comparison(tokens)?;

            left = AstNode::BinaryOp { left: Box::new(left),
                                       op,
                                       right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses relational and equality operators, and the prefix `not`.
///
/// `not` re-enters the full-precedence entry point, so `not a == b` parses as
/// `not (a == b)` and `not a and b` parses as `not (a and b)`.
///
/// Grammar:
/// ```text
///     comparison := "not" expr
///                 | additive (("==" | "!=" | "<" | "<=" | ">" | ">=") additive)*
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// A possibly nested `AstNode::BinaryOp` tree, or an `AstNode::UnaryOp` for
/// the `not` form.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Not) = tokens.peek() {
        tokens.next();
        let operand = parse_expression(tokens)?;

        return Ok(AstNode::UnaryOp { op:      UnaryOperator::Not,
                                     operand: Box::new(operand), });
    }

    let mut left = parse_additive(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && is_comparison_op(op)
        {
            tokens.next();
            let right = parse_additive(tokens)?;

            left = AstNode::BinaryOp { left: Box::new(left),
                                       op,
                                       right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// An `AstNode::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;

            left = AstNode::BinaryOp { left: Box::new(left),
                                       op,
                                       right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// Grammar: `multiplicative := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_factor(tokens)?;

            left = AstNode::BinaryOp { left: Box::new(left),
                                       op,
                                       right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison, or a logical keyword), and `None` for all other
/// tokens.
///
/// # Example
/// ```
/// use rill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::And),
///            Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        Token::Mod => Some(BinaryOperator::Mod),
        Token::Power => Some(BinaryOperator::Pow),
        Token::DoubleEquals => Some(BinaryOperator::Equal),
        Token::NotEquals => Some(BinaryOperator::NotEqual),
        Token::LessThan => Some(BinaryOperator::Less),
        Token::LessThanEquals => Some(BinaryOperator::LessEqual),
        Token::GreaterThan => Some(BinaryOperator::Greater),
        Token::GreaterThanEquals => Some(BinaryOperator::GreaterEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// # Example
/// ```
/// use rill::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(is_comparison_op(BinaryOperator::NotEqual));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
