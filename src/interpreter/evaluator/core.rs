use std::rc::Rc;

use crate::{
    ast::AstNode,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// The interpreter itself carries no state; all bindings live in the
/// [`Environment`] chain passed to [`visit`](Self::visit), which is what lets
/// the interactive prompt persist bindings across invocations.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    /// Creates a new interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates one AST node against an environment.
    ///
    /// This is the main entry point for evaluation and is total over the node
    /// variants. `Ok(None)` marks the absence of a value (loops, `if` with no
    /// matching case), which is distinct from the Number `0`.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    /// - `env`: The scope the node is evaluated in.
    ///
    /// # Returns
    /// The node's value, `None` for valueless constructs, or the first
    /// runtime error.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     interpreter::{
    ///         environment::Environment, evaluator::core::Interpreter, lexer::tokenize,
    ///         parser::core::parse, value::core::Value,
    ///     },
    /// };
    ///
    /// let ast = parse(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
    /// let env = Environment::root();
    ///
    /// let result = Interpreter::new().visit(&ast, &env).unwrap();
    /// assert_eq!(result, Some(Value::Number(512.0)));
    /// ```
    pub fn visit(&self, node: &AstNode, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
        match node {
            AstNode::Number { literal } => Ok(Some(Self::eval_number(literal)?)),

            AstNode::Str { value } => Ok(Some(Value::from(value.as_str()))),

            AstNode::UnaryOp { op, operand } => {
                let value = self.eval_child(operand, env)?;
                Ok(Some(Self::eval_unary(*op, &value)?))
            },

            AstNode::BinaryOp { left, op, right } => {
                let lhs = self.eval_child(left, env)?;
                let rhs = self.eval_child(right, env)?;

                Ok(Some(Self::eval_binary(*op, &lhs, &rhs)?))
            },

            AstNode::VarAccess { name } => Ok(Some(env.get(name)?)),

            AstNode::VarAssign { name, value } => {
                let value = self.eval_child(value, env)?;
                env.set(name, value.clone());

                Ok(Some(value))
            },

            AstNode::If { cases, else_case } => self.eval_if(cases, else_case.as_deref(), env),

            AstNode::For { var,
                           start,
                           end,
                           step,
                           body, } => {
                self.eval_for(var, start, end, step.as_deref(), body, env)
            },

            AstNode::While { condition, body } => self.eval_while(condition, body, env),

            AstNode::FuncDef { name, params, body } => {
                self.eval_func_def(name.as_deref(), params, body, env)
            },

            AstNode::Call { callee, args } => self.eval_call(callee, args, env),

            AstNode::List { elements } => self.eval_list(elements, env),
        }
    }

    /// Evaluates a subexpression and requires it to produce a value.
    ///
    /// Operands, conditions, loop bounds, callees, arguments and list
    /// elements all need a value; an embedded valueless construct (such as a
    /// loop) fails here rather than propagating an absence.
    pub fn eval_child(&self, node: &AstNode, env: &Rc<Environment>) -> EvalResult<Value> {
        self.visit(node, env)?.ok_or(RuntimeError::MissingValue)
    }

    /// Reparses a numeric literal's lexeme and wraps it.
    fn eval_number(literal: &str) -> EvalResult<Value> {
        literal.parse::<f64>()
               .map(Value::Number)
               .map_err(|_| RuntimeError::InvalidNumberLiteral { literal: literal.to_owned() })
    }

    /// Evaluates list elements left to right and builds a new list.
    fn eval_list(&self, elements: &[AstNode], env: &Rc<Environment>) -> EvalResult<Option<Value>> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval_child(element, env)?);
        }

        Ok(Some(Value::from(values)))
    }
}
