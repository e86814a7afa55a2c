use std::rc::Rc;

use crate::interpreter::value::function::FunctionValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions, bindings
/// and function returns. There is no boolean variant: comparisons and logical
/// connectives produce `Number(1.0)` or `Number(0.0)`, and the root
/// environment preloads `true`, `false` and `null` accordingly.
///
/// Values are immutable; every operation that looks like a mutation (list
/// append, removal, concatenation) returns a new value. Aggregates are shared
/// through `Rc`, so cloning a value is cheap.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable text value.
    Str(Rc<str>),
    /// An ordered sequence of values.
    List(Rc<Vec<Self>>),
    /// A callable produced by a `fun` definition.
    Function(Rc<FunctionValue>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Encodes a host boolean as the canonical Number: `1` for true, `0` for
    /// false. Comparisons, logical connectives and `not` all report their
    /// results through this.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_bool(true), Value::Number(1.0));
    /// assert_eq!(Value::from_bool(false), Value::Number(0.0));
    /// ```
    #[must_use]
    pub fn from_bool(v: bool) -> Self {
        if v { Self::Number(1.0) } else { Self::Number(0.0) }
    }

    /// Control-flow truthiness: `if` and `while` run a branch only when its
    /// condition is *exactly* the Number `1.0`.
    ///
    /// This is stricter than the coercion used by `and`/`or`, which accept
    /// any strictly positive Number; predicates built from comparisons and
    /// logical operators always yield the canonical `0`/`1` and satisfy both.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(1.0).is_true());
    /// assert!(!Value::Number(2.0).is_true());
    /// assert!(!Value::from("1").is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 1.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(text) => write!(f, "{text}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => write!(f, "<function {}>", function.name),
        }
    }
}
