use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to a specialized table. Arithmetic
    /// operators (`+ - * / % ^`) dispatch on the left operand's variant —
    /// Numbers, Strings and Lists each have their own table, and function
    /// values support no operator at all. Comparisons and the logical
    /// connectives each have a single table covering all operand pairings.
    ///
    /// Any unsupported pairing fails with
    /// `Runtime Error: Illegal operation '<symbol>'`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       &Value::Number(3.0),
    ///                                       &Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let err = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(3.0),
    ///                                    &Value::from("four"));
    /// assert_eq!(err.unwrap_err().to_string(),
    ///            "Runtime Error: Illegal operation '+'");
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => match left {
                Value::Number(_) => Self::eval_scalar_op(op, left, right),
                Value::Str(_) => Self::eval_string_op(op, left, right),
                Value::List(_) => Self::eval_list_op(op, left, right),
                Value::Function(_) => {
                    Err(RuntimeError::IllegalOperation { symbol: op.symbol() })
                },
            },

            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right)
            },

            And | Or => Self::eval_logic(op, left, right),
        }
    }
}
