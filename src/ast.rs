use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `AstNode` covers every construct of the language, from literals and
/// variables to conditionals, loops, function definitions, calls and list
/// literals. Each variant models a distinct syntactic form. A whole program is
/// one node; nodes are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A numeric literal. The lexeme is kept verbatim and reparsed at
    /// evaluation time.
    Number {
        /// The literal text, e.g. `42` or `3.14`.
        literal: String,
    },
    /// A string literal. The payload is the unescaped text.
    Str {
        /// The string contents.
        value: String,
    },
    /// A unary operation (`-x`, `+x`, `not x`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation covering arithmetic, comparisons and logical
    /// connectives.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Reference to a binding by name.
    VarAccess {
        /// Name of the variable.
        name: String,
    },
    /// Binds or rebinds a name in the current scope (`var x = expr`). The
    /// whole form evaluates to the assigned value.
    VarAssign {
        /// Name of the variable.
        name:  String,
        /// The expression whose value is bound.
        value: Box<Self>,
    },
    /// Conditional expression with chained `elif` cases and an optional
    /// `else`.
    If {
        /// Ordered condition/body pairs; the first matching condition wins.
        cases:     Vec<IfCase>,
        /// Body evaluated when no case matches.
        else_case: Option<Box<Self>>,
    },
    /// Numeric loop: `for i = start to end step s then body`.
    For {
        /// The loop variable name, bound in the current scope.
        var:   String,
        /// Starting value expression.
        start: Box<Self>,
        /// Exclusive bound expression.
        end:   Box<Self>,
        /// Increment expression; `1` when absent.
        step:  Option<Box<Self>>,
        /// The body evaluated once per iteration.
        body:  Box<Self>,
    },
    /// Conditional loop: `while condition then body`.
    While {
        /// Loop condition, re-evaluated before each iteration.
        condition: Box<Self>,
        /// The body evaluated while the condition holds.
        body:      Box<Self>,
    },
    /// Produces a callable: `fun name(params) -> body`. A named definition is
    /// also bound in the defining scope; an anonymous one is not bound
    /// anywhere.
    FuncDef {
        /// Optional function name.
        name:   Option<String>,
        /// Ordered parameter names.
        params: Vec<String>,
        /// The body expression, shared with the function value.
        body:   Rc<Self>,
    },
    /// Invokes a callable with evaluated arguments.
    Call {
        /// The expression producing the callable.
        callee: Box<Self>,
        /// Argument expressions, evaluated left to right.
        args:   Vec<Self>,
    },
    /// Builds a list from evaluated elements.
    List {
        /// Element expressions, evaluated left to right.
        elements: Vec<Self>,
    },
}

/// One `condition`/`body` pair of an `if`/`elif` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    /// The guard expression.
    pub condition: AstNode,
    /// The body evaluated when the guard matches.
    pub body:      AstNode,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// The operator as written in source, used verbatim in diagnostics.
    ///
    /// # Example
    /// ```
    /// use rill::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.symbol(), "^");
    /// assert_eq!(BinaryOperator::And.symbol(), "and");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`); passes the operand through.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical not (`not x`); maps zero to `1` and anything else to `0`.
    Not,
}

impl UnaryOperator {
    /// The operator as written in source, used verbatim in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
