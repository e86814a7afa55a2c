use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a logical connective between two Numbers.
    ///
    /// A strictly positive operand counts as true; `0` and negative Numbers
    /// count as false. The result is the canonical `1`/`0`. Both operands
    /// have already been evaluated by the time this runs — there is no
    /// short-circuiting.
    ///
    /// Non-Number operands are an illegal operation.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_logic(BinaryOperator::And,
    ///                                      &Value::Number(3.0),
    ///                                      &Value::Number(2.0));
    /// assert_eq!(result.unwrap(), Value::Number(1.0));
    ///
    /// // Negative operands are not truthy here.
    /// let result = Interpreter::eval_logic(BinaryOperator::Or,
    ///                                      &Value::Number(-1.0),
    ///                                      &Value::Number(0.0));
    /// assert_eq!(result.unwrap(), Value::Number(0.0));
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => match op {
                And => Ok(Value::from_bool(*a > 0.0 && *b > 0.0)),
                Or => Ok(Value::from_bool(*a > 0.0 || *b > 0.0)),
                _ => unreachable!(),
            },

            _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
        }
    }
}
