use std::rc::Rc;

use crate::{
    ast::AstNode,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// The payload of a `Value::Function`: a name, the ordered parameter names
/// and the shared body expression.
///
/// An anonymous `fun` carries the name `<anonymous>`; the name appears in the
/// rendering (`<function NAME>`) and in arity diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    /// The function's name.
    pub name:   String,
    /// Ordered parameter names.
    pub params: Vec<String>,
    /// The body expression, shared with the AST it was defined in.
    pub body:   Rc<AstNode>,
}

impl FunctionValue {
    /// Invokes the function with already-evaluated arguments.
    ///
    /// The invocation scope is a fresh environment parented on the *caller's*
    /// environment, so free names in the body resolve through the call site.
    /// Parameters are bound into that scope and the body is visited there;
    /// the body's result (possibly absent) is the call's result.
    ///
    /// # Parameters
    /// - `caller_env`: The environment the call expression was evaluated in.
    /// - `args`: Evaluated arguments, in call order.
    ///
    /// # Errors
    /// Fails with `N too many args passed into '<name>'` or
    /// `N too few args passed into '<name>'` when the argument count does not
    /// match the parameter count; otherwise propagates errors from the body.
    pub fn execute(&self, caller_env: &Rc<Environment>, args: Vec<Value>) -> EvalResult<Option<Value>> {
        if args.len() > self.params.len() {
            return Err(RuntimeError::TooManyArgs { count: args.len() - self.params.len(),
                                                   name:  self.name.clone(), });
        }

        if args.len() < self.params.len() {
            return Err(RuntimeError::TooFewArgs { count: self.params.len() - args.len(),
                                                  name:  self.name.clone(), });
        }

        let env = Environment::with_parent(caller_env);

        for (param, value) in self.params.iter().zip(args) {
            env.set(param, value);
        }

        Interpreter::new().visit(&self.body, &env)
    }
}
