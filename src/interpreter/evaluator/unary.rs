use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: passes the operand through unchanged.
    /// - `Negate`: multiplies a Number by `-1`.
    /// - `Not`: maps the Number `0` to `1` and any other Number to `0`.
    ///
    /// `Negate` and `Not` apply to Numbers only; other operands fail with the
    /// operator's illegal-operation diagnostic.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Number(0.0)).unwrap();
    /// assert_eq!(v, Value::Number(1.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Number(-3.0)).unwrap();
    /// assert_eq!(v, Value::Number(0.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value.clone()),

            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(n * -1.0)),
                _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
            },

            UnaryOperator::Not => match value {
                Value::Number(n) => Ok(Value::from_bool(*n == 0.0)),
                _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
            },
        }
    }
}
