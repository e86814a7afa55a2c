use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation whose left operand is a String.
    ///
    /// Two pairings are supported:
    /// - `String + String` concatenates.
    /// - `String * Number` replicates the string, with the count truncated
    ///   toward zero; a non-positive count yields the empty string.
    ///
    /// Every other pairing is an illegal operation.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_string_op(BinaryOperator::Mul,
    ///                                          &Value::from("ab"),
    ///                                          &Value::Number(3.9))
    ///                          .unwrap();
    /// assert_eq!(result, Value::from("ababab"));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn eval_string_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};

        match (op, left, right) {
            (Add, Value::Str(a), Value::Str(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);

                Ok(Value::from(joined))
            },

            (Mul, Value::Str(text), Value::Number(count)) => {
                // `as` truncates toward zero; NaN becomes 0.
                let times = *count as i64;

                if times <= 0 {
                    return Ok(Value::from(String::new()));
                }

                Ok(Value::from(text.repeat(times as usize)))
            },

            _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
        }
    }
}
