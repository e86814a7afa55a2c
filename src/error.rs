/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero, unsupported operand pairings, undefined
/// variables, arity mismatches and out-of-range list indices.
pub mod runtime_error;
/// Lexical and syntax errors.
///
/// Defines all error types that can occur before evaluation: unrecognized
/// characters, an incomplete two-character operator, and every way the parser
/// can reject a token in context.
pub mod syntax_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
