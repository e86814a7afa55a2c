use std::rc::Rc;

use crate::{
    ast::{AstNode, IfCase},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an `if`/`elif`/`else` chain.
    ///
    /// Cases are tried in order; the first whose condition evaluates to
    /// exactly the Number `1.0` has its body evaluated and returned. When no
    /// case matches, the `else` body (if any) is evaluated; otherwise the
    /// result is absent.
    ///
    /// Note the strictness: a condition of `2` or of a non-Number does not
    /// match. Predicates built from comparisons and logical connectives yield
    /// the canonical `0`/`1` and behave as expected.
    pub fn eval_if(&self,
                   cases: &[IfCase],
                   else_case: Option<&AstNode>,
                   env: &Rc<Environment>)
                   -> EvalResult<Option<Value>> {
        for case in cases {
            if self.eval_child(&case.condition, env)?.is_true() {
                return self.visit(&case.body, env);
            }
        }

        match else_case {
            Some(body) => self.visit(body, env),
            None => Ok(None),
        }
    }

    /// Evaluates a numeric `for` loop.
    ///
    /// `start`, `end` and the optional `step` (default `1`) must evaluate to
    /// Numbers. The loop variable is bound in the *current* scope before each
    /// iteration, so it remains visible after the loop. The bound is strict:
    /// the loop runs while `i < end` for a non-negative step and while
    /// `i > end` otherwise, and the end value itself is never reached.
    ///
    /// The loop produces no value.
    pub fn eval_for(&self,
                    var: &str,
                    start: &AstNode,
                    end: &AstNode,
                    step: Option<&AstNode>,
                    body: &AstNode,
                    env: &Rc<Environment>)
                    -> EvalResult<Option<Value>> {
        let start = self.eval_number_operand(start, env)?;
        let end = self.eval_number_operand(end, env)?;
        let step = match step {
            Some(expr) => self.eval_number_operand(expr, env)?,
            None => 1.0,
        };

        let mut index = start;

        loop {
            let in_range = if step >= 0.0 { index < end } else { index > end };
            if !in_range {
                break;
            }

            env.set(var, Value::Number(index));
            self.visit(body, env)?;

            index += step;
        }

        Ok(None)
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before each iteration; the loop exits as
    /// soon as it is not exactly the Number `1.0`. The loop produces no
    /// value.
    pub fn eval_while(&self,
                      condition: &AstNode,
                      body: &AstNode,
                      env: &Rc<Environment>)
                      -> EvalResult<Option<Value>> {
        while self.eval_child(condition, env)?.is_true() {
            self.visit(body, env)?;
        }

        Ok(None)
    }

    /// Evaluates a loop-header expression that must be a Number.
    fn eval_number_operand(&self, expr: &AstNode, env: &Rc<Environment>) -> EvalResult<f64> {
        match self.eval_child(expr, env)? {
            Value::Number(n) => Ok(n),
            _ => Err(RuntimeError::ExpectedNumber),
        }
    }
}
