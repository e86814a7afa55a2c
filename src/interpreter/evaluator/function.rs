use std::rc::Rc;

use crate::{
    ast::AstNode,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, function::FunctionValue},
    },
};

impl Interpreter {
    /// Evaluates a `fun` definition into a function value.
    ///
    /// The body is shared with the AST by reference. A named definition is
    /// also bound into the defining scope under its name; an anonymous one
    /// carries the name `<anonymous>` and is not bound anywhere. Either way
    /// the definition evaluates to the function value itself.
    pub fn eval_func_def(&self,
                         name: Option<&str>,
                         params: &[String],
                         body: &Rc<AstNode>,
                         env: &Rc<Environment>)
                         -> EvalResult<Option<Value>> {
        let function = FunctionValue { name:   name.unwrap_or("<anonymous>").to_owned(),
                                       params: params.to_vec(),
                                       body:   Rc::clone(body), };

        let value = Value::Function(Rc::new(function));

        if let Some(name) = name {
            env.set(name, value.clone());
        }

        Ok(Some(value))
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments left to right; the
    /// invocation itself is handled by
    /// [`FunctionValue::execute`](crate::interpreter::value::function::FunctionValue::execute).
    ///
    /// # Errors
    /// A non-function callee fails with `Illegal operation '()'`.
    pub fn eval_call(&self,
                     callee: &AstNode,
                     args: &[AstNode],
                     env: &Rc<Environment>)
                     -> EvalResult<Option<Value>> {
        let target = self.eval_child(callee, env)?;

        let mut evaluated = Vec::with_capacity(args.len());
        for arg in args {
            evaluated.push(self.eval_child(arg, env)?);
        }

        match target {
            Value::Function(function) => function.execute(env, evaluated),
            _ => Err(RuntimeError::IllegalOperation { symbol: "()" }),
        }
    }
}
