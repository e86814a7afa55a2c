use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{AstNode, BinaryOperator, IfCase, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a factor: an optional prefix sign applied to a power expression.
///
/// Prefix operators are right-associative, so `--x` parses as `-(-x)`.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | power
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// An `AstNode::UnaryOp` or a power expression.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Plus) => {
            tokens.next();
            let operand = parse_factor(tokens)?;

            Ok(AstNode::UnaryOp { op:      UnaryOperator::Plus,
                                  operand: Box::new(operand), })
        },
        Some(Token::Minus) => {
            tokens.next();
            let operand = parse_factor(tokens)?;

            Ok(AstNode::UnaryOp { op:      UnaryOperator::Negate,
                                  operand: Box::new(operand), })
        },
        _ => parse_power(tokens),
    }
}

/// Parses exponentiation expressions.
///
/// The right operand re-enters `factor`, which makes `^` right-associative:
/// `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)` and evaluates to `512`. It also lets a
/// sign bind tighter on the right: `2 ^ -1` is valid.
///
/// Grammar: `power := call ("^" factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_call(tokens)?;

    loop {
        if let Some(Token::Power) = tokens.peek() {
            tokens.next();
            let right = parse_factor(tokens)?;

            left = AstNode::BinaryOp { left: Box::new(left),
                                       op: BinaryOperator::Pow,
                                       right: Box::new(right) };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses an atom with an optional call suffix.
///
/// The suffix applies at most once; chained calls like `f()()` are not part
/// of the grammar (the second `(` is left for the caller, which rejects it).
///
/// Grammar: `call := atom ("(" (expr ("," expr)*)? ")")?`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
///
/// # Returns
/// The atom itself, or an `AstNode::Call` wrapping it.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    let atom = parse_atom(tokens)?;

    if let Some(Token::OpenParen) = tokens.peek() {
        tokens.next();
        let args = parse_comma_separated(tokens, parse_expression, &Token::CloseParen)?;

        return Ok(AstNode::Call { callee: Box::new(atom),
                                  args });
    }

    Ok(atom)
}

/// Parses the smallest self-contained expression form.
///
/// Grammar:
/// ```text
///     atom := INT | FLOAT | STRING | IDENTIFIER
///           | "(" expr ")"
///           | list-expr | if-expr | for-expr | while-expr | func-def
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed atom.
///
/// # Errors
/// `SyntaxError::ExpectedAtom` when the lookahead starts no atom form; the
/// rendered detail enumerates the acceptable starter tokens.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Int(literal) | Token::Float(literal)) => {
            tokens.next();
            Ok(AstNode::Number { literal: literal.clone() })
        },
        Some(Token::Str(text)) => {
            tokens.next();
            Ok(AstNode::Str { value: text.clone() })
        },
        Some(Token::Identifier(name)) => {
            tokens.next();
            Ok(AstNode::VarAccess { name: name.clone() })
        },
        Some(Token::OpenParen) => parse_grouping(tokens),
        Some(Token::OpenBracket) => parse_list_literal(tokens),
        Some(Token::If) => parse_if_expression(tokens),
        Some(Token::For) => parse_for_expression(tokens),
        Some(Token::While) => parse_while_expression(tokens),
        Some(Token::Fun) => parse_function_definition(tokens),
        _ => Err(SyntaxError::ExpectedAtom),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expr ")"`
///
/// The inner expression is returned as-is; there is no wrapper node.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();
    let expression = parse_expression(tokens)?;

    match tokens.next() {
        Some(Token::CloseParen) => Ok(expression),
        _ => Err(SyntaxError::ExpectedClosingParen),
    }
}

/// Parses a list literal of the form `[expr1, expr2, ..., exprN]`.
///
/// An empty list `[]` is accepted.
///
/// Grammar: `list-expr := "[" (expr ("," expr)*)? "]"`
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();
    let elements = parse_comma_separated(tokens, parse_expression, &Token::CloseBracket)?;

    Ok(AstNode::List { elements })
}

/// Parses an `if` expression with chained `elif` cases and an optional
/// `else`.
///
/// Grammar:
/// ```text
///     if-expr := "if" expr "then" expr
///                ("elif" expr "then" expr)*
///                ("else" expr)?
/// ```
///
/// # Returns
/// An `AstNode::If` with the ordered condition/body cases.
fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let mut cases = Vec::new();

    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, SyntaxError::ExpectedThen)?;
    let body = parse_expression(tokens)?;

    cases.push(IfCase { condition, body });

    loop {
        if let Some(Token::Elif) = tokens.peek() {
            tokens.next();

            let condition = parse_expression(tokens)?;
            expect(tokens, &Token::Then, SyntaxError::ExpectedThen)?;
            let body = parse_expression(tokens)?;

            cases.push(IfCase { condition, body });
            continue;
        }

        break;
    }

    let else_case = match tokens.peek() {
        Some(Token::Else) => {
            tokens.next();
            Some(Box::new(parse_expression(tokens)?))
        },
        _ => None,
    };

    Ok(AstNode::If { cases, else_case })
}

/// Parses a `for` expression.
///
/// Grammar:
/// ```text
///     for-expr := "for" IDENTIFIER "=" expr "to" expr ("step" expr)? "then" expr
/// ```
///
/// # Returns
/// An `AstNode::For` node.
fn parse_for_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let var = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, SyntaxError::ExpectedEquals)?;
    let start = parse_expression(tokens)?;
    expect(tokens, &Token::To, SyntaxError::ExpectedTo)?;
    let end = parse_expression(tokens)?;

    let step = match tokens.peek() {
        Some(Token::Step) => {
            tokens.next();
            Some(Box::new(parse_expression(tokens)?))
        },
        _ => None,
    };

    expect(tokens, &Token::Then, SyntaxError::ExpectedThen)?;
    let body = parse_expression(tokens)?;

    Ok(AstNode::For { var,
                      start: Box::new(start),
                      end: Box::new(end),
                      step,
                      body: Box::new(body) })
}

/// Parses a `while` expression.
///
/// Grammar: `while-expr := "while" expr "then" expr`
fn parse_while_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, SyntaxError::ExpectedThen)?;
    let body = parse_expression(tokens)?;

    Ok(AstNode::While { condition: Box::new(condition),
                        body:      Box::new(body), })
}

/// Parses a function definition.
///
/// With the name omitted, the definition produces an anonymous function value
/// that is not bound into any scope.
///
/// Grammar:
/// ```text
///     func-def := "fun" IDENTIFIER? "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" "->" expr
/// ```
///
/// # Returns
/// An `AstNode::FuncDef` node.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<AstNode>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let name = match tokens.peek() {
        Some(Token::Identifier(name)) => {
            tokens.next();
            Some(name.clone())
        },
        _ => None,
    };

    expect(tokens, &Token::OpenParen, SyntaxError::ExpectedOpenParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::CloseParen)?;
    expect(tokens, &Token::Arrow, SyntaxError::ExpectedArrow)?;
    let body = parse_expression(tokens)?;

    Ok(AstNode::FuncDef { name,
                          params,
                          body: Rc::new(body) })
}
