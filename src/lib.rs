//! # rill
//!
//! rill is a small dynamic expression language with a tree-walking
//! interpreter. A program is a single expression; rill tokenizes it, builds an
//! abstract syntax tree, then evaluates the tree against a lexically scoped
//! environment. Values are Numbers, Strings, Lists and first-class Functions;
//! booleans are Numbers (`true` is `1`, `false` and `null` are `0`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::interpreter::{
    environment::Environment, evaluator::core::Interpreter, lexer::tokenize, parser::core::parse,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `AstNode` enum and the operator enums that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator; nodes are immutable
/// after parsing.
pub mod ast;
/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code. Each error renders as a single diagnostic line of the form
/// `<Category>: <detail>`, where the category is one of `Illegal Character`,
/// `Expected Character`, `Invalid Syntax` or `Runtime Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the environment chain to provide a complete runtime for
/// source code evaluation.
pub mod interpreter;

/// Runs a source string through the full pipeline against a given environment.
///
/// The source is tokenized, parsed into one expression and evaluated. The
/// environment is shared so that callers (such as the interactive prompt) can
/// persist bindings across invocations.
///
/// Constructs like `for`, `while` and `if` without a matching case yield no
/// value, which is reported as `Ok(None)`; everything else yields
/// `Ok(Some(value))`.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error encountered. The
/// rendered error is the one-line diagnostic for the failure.
///
/// # Examples
/// ```
/// use rill::{evaluate, interpreter::environment::Environment};
///
/// let env = Environment::root();
///
/// let result = evaluate("1 + 2 * 3", &env).unwrap();
/// assert_eq!(result.unwrap().to_string(), "7");
///
/// // Bindings persist through the shared environment.
/// evaluate("var a = 5", &env).unwrap();
/// let result = evaluate("a * a", &env).unwrap();
/// assert_eq!(result.unwrap().to_string(), "25");
///
/// // Loops produce no reportable value.
/// let result = evaluate("while 0 then 1", &env).unwrap();
/// assert!(result.is_none());
/// ```
pub fn evaluate(source: &str,
                env: &Rc<Environment>)
                -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;

    Ok(Interpreter::new().visit(&ast, env)?)
}
