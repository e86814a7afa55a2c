/// Binary operator evaluation logic.
///
/// The operator algebra: a router keyed on operator class and left-operand
/// variant, with one table each for Number, String and List arithmetic, plus
/// comparisons and logical connectives.
pub mod binary;
/// Control-flow evaluation.
///
/// Implements `if`/`elif`/`else` selection and the `for` and `while` loops,
/// none of which produce a reportable value on their own.
pub mod control_flow;
/// Core evaluation logic.
///
/// Contains the tree-walking `visit` dispatch over AST nodes and the shared
/// must-produce-a-value helper.
pub mod core;
/// Function definition and invocation.
///
/// Builds function values from `fun` definitions and evaluates call
/// expressions.
pub mod function;
/// Unary operator evaluation logic.
///
/// Implements identity, numeric negation and logical `not`.
pub mod unary;
