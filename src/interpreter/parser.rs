/// Binary-operator precedence levels.
///
/// Implements the left-associative ladder from `and`/`or` through comparisons
/// down to additive and multiplicative operators, plus the token-to-operator
/// mapping shared by all levels.
pub mod binary;
/// Parser entry points.
///
/// Contains `parse` (whole token sequence to one AST root) and
/// `parse_expression` (the full-precedence entry point, which also handles
/// `var` bindings).
pub mod core;
/// Unary operators, power, calls and atoms.
///
/// Covers the high-precedence tail of the grammar: prefix `+`/`-`,
/// right-associative `^`, the optional call suffix, and every atom form
/// including list literals and the keyword-led constructs.
pub mod unary;
/// Shared parsing utilities.
///
/// Comma-separated element lists, identifier extraction and single-token
/// expectations.
pub mod utils;
