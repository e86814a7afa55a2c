use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation whose left operand is a Number.
    ///
    /// Arithmetic is IEEE 754 double precision. Division checks its divisor
    /// and fails with `Division by 0`; modulo follows the host remainder (so
    /// `x % 0` is `NaN`, not an error); `^` is real-valued power. The right
    /// operand must also be a Number, otherwise the pairing is an illegal
    /// operation.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`+ - * / % ^`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed Number.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let x = Value::Number(2.0);
    /// let y = Value::Number(9.0);
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Pow, &x, &y).unwrap();
    /// assert_eq!(result, Value::Number(512.0));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => match op {
                Add => Ok(Value::Number(a + b)),
                Sub => Ok(Value::Number(a - b)),
                Mul => Ok(Value::Number(a * b)),
                Div => {
                    if *b == 0.0 {
                        return Err(RuntimeError::DivisionByZero);
                    }

                    Ok(Value::Number(a / b))
                },
                Mod => Ok(Value::Number(a % b)),
                Pow => Ok(Value::Number(a.powf(*b))),
                _ => unreachable!(),
            },

            _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
        }
    }
}
