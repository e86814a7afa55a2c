#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Evaluation stops at the first error; each variant renders as a one-line
/// `Runtime Error: <detail>` diagnostic.
pub enum RuntimeError {
    /// An operator was applied to an operand pairing that does not support
    /// it, or a non-function was invoked (symbol `()`).
    IllegalOperation {
        /// The operator as written in source.
        symbol: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Tried to read a name with no binding anywhere on the scope chain.
    UndefinedVariable {
        /// The name that was looked up.
        name: String,
    },
    /// A call supplied more arguments than the function has parameters.
    TooManyArgs {
        /// How many arguments were surplus.
        count: usize,
        /// The function's name.
        name:  String,
    },
    /// A call supplied fewer arguments than the function has parameters.
    TooFewArgs {
        /// How many arguments were missing.
        count: usize,
        /// The function's name.
        name:  String,
    },
    /// A list index was outside the valid range.
    IndexOutOfBounds,
    /// A list index had a fractional part.
    IndexNotInteger,
    /// A Number was required (loop bounds and step), but something else was
    /// found.
    ExpectedNumber,
    /// A numeric literal's lexeme failed to reparse at evaluation time.
    InvalidNumberLiteral {
        /// The offending lexeme.
        literal: String,
    },
    /// An operand position required a value, but the expression produced
    /// none (for example an embedded loop).
    MissingValue,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalOperation { symbol } => {
                write!(f, "Runtime Error: Illegal operation '{symbol}'")
            },

            Self::DivisionByZero => write!(f, "Runtime Error: Division by 0"),

            Self::UndefinedVariable { name } => {
                write!(f, "Runtime Error: '{name}' is not defined")
            },

            Self::TooManyArgs { count, name } => {
                write!(f, "Runtime Error: {count} too many args passed into '{name}'")
            },

            Self::TooFewArgs { count, name } => {
                write!(f, "Runtime Error: {count} too few args passed into '{name}'")
            },

            Self::IndexOutOfBounds => write!(f, "Runtime Error: Index out of bounds"),

            Self::IndexNotInteger => write!(f, "Runtime Error: Index must be an integer"),

            Self::ExpectedNumber => write!(f, "Runtime Error: Expected a number"),

            Self::InvalidNumberLiteral { literal } => {
                write!(f, "Runtime Error: '{literal}' is not a valid number")
            },

            Self::MissingValue => write!(f, "Runtime Error: Expression produced no value"),
        }
    }
}

impl std::error::Error for RuntimeError {}
