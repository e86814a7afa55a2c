/// The environment module implements the scope chain.
///
/// An environment is a mapping from names to runtime values plus an optional
/// parent link. Lookup walks the chain toward the root; writes and removals
/// touch only the local scope. The root environment preloads the `null`,
/// `true` and `false` constants.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs arithmetic
/// and logical operations through the value algebra, drives control flow and
/// invokes functions. It is the core execution engine of the interpreter.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite sequence of
/// tokens terminated by an end-of-input sentinel. Literals and identifiers
/// keep their lexeme text; reserved words and operators are unit tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent with a single token of lookahead. The grammar climbs
/// from `and`/`or` down through comparisons, additive and multiplicative
/// levels to unary operators, right-associative power, calls and atoms.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum (Numbers, Strings, Lists, Functions)
/// together with rendering, truthiness helpers, and the callable function
/// value.
pub mod value;
