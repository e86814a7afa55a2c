use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <operator> Value`.
    ///
    /// Numbers support the full relational set. Strings and Lists support
    /// only `==` and `!=`: Strings compare byte-for-byte, Lists by deep
    /// structural equality. Every other pairing — including the ordering
    /// operators on non-Numbers and any comparison involving a function — is
    /// an illegal operation.
    ///
    /// The result is always the canonical `1`/`0`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing `Number(1.0)` or `Number(0.0)`.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less,
    ///                                           &Value::Number(3.0),
    ///                                           &Value::Number(5.0));
    /// assert_eq!(result.unwrap(), Value::Number(1.0));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                           &Value::from("ab"),
    ///                                           &Value::from("ab"));
    /// assert_eq!(result.unwrap(), Value::Number(1.0));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::from_bool(match op {
                                                           Equal => a == b,
                                                           NotEqual => a != b,
                                                           Less => a < b,
                                                           LessEqual => a <= b,
                                                           Greater => a > b,
                                                           GreaterEqual => a >= b,
                                                           _ => unreachable!(),
                                                       })),

            (Value::Str(a), Value::Str(b)) => match op {
                Equal => Ok(Value::from_bool(a == b)),
                NotEqual => Ok(Value::from_bool(a != b)),
                _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
            },

            (Value::List(a), Value::List(b)) => match op {
                Equal => Ok(Value::from_bool(a == b)),
                NotEqual => Ok(Value::from_bool(a != b)),
                _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
            },

            _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
        }
    }
}
