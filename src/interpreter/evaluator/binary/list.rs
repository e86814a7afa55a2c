use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation whose left operand is a List.
    ///
    /// The list operators reuse the arithmetic symbols:
    /// - `list + value` appends `value` (of any type), returning a new list.
    /// - `list - index` removes the element at `index`, returning a new list.
    /// - `list * list` concatenates two lists.
    /// - `list / index` retrieves the element at `index`.
    ///
    /// Indices must be whole Numbers; a negative index counts from the end
    /// (`-1` is the last element, `-len` the first). Every other pairing is
    /// an illegal operation. The left operand is never mutated.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let list = Value::from(vec![Value::Number(1.0),
    ///                             Value::Number(2.0),
    ///                             Value::Number(3.0),]);
    ///
    /// let last = Interpreter::eval_list_op(BinaryOperator::Div, &list, &Value::Number(-1.0));
    /// assert_eq!(last.unwrap(), Value::Number(3.0));
    ///
    /// let err = Interpreter::eval_list_op(BinaryOperator::Div, &list, &Value::Number(3.0));
    /// assert_eq!(err.unwrap_err().to_string(),
    ///            "Runtime Error: Index out of bounds");
    /// ```
    pub fn eval_list_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (op, left, right) {
            // Append a single element.
            (Add, Value::List(elements), value) => {
                let mut extended = elements.as_ref().clone();
                extended.push(value.clone());

                Ok(Value::from(extended))
            },

            // Remove the element at an index.
            (Sub, Value::List(elements), Value::Number(index)) => {
                let position = element_index(*index, elements.len())?;

                let mut trimmed = elements.as_ref().clone();
                trimmed.remove(position);

                Ok(Value::from(trimmed))
            },

            // Concatenate two lists.
            (Mul, Value::List(a), Value::List(b)) => {
                let mut joined = a.as_ref().clone();
                joined.extend(b.iter().cloned());

                Ok(Value::from(joined))
            },

            // Retrieve the element at an index.
            (Div, Value::List(elements), Value::Number(index)) => {
                let position = element_index(*index, elements.len())?;

                Ok(elements[position].clone())
            },

            _ => Err(RuntimeError::IllegalOperation { symbol: op.symbol() }),
        }
    }
}

/// Resolves a Number index against a list length.
///
/// Fractional indices fail with `Index must be an integer`. Negative indices
/// count from the end; anything outside `-len ..= len - 1` fails with
/// `Index out of bounds`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn element_index(index: f64, len: usize) -> EvalResult<usize> {
    if index.fract() != 0.0 {
        return Err(RuntimeError::IndexNotInteger);
    }

    let resolved = if index < 0.0 { len as f64 + index } else { index };

    if resolved < 0.0 || resolved >= len as f64 {
        return Err(RuntimeError::IndexOutOfBounds);
    }

    Ok(resolved as usize)
}
