use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A lexical scope: name-to-value bindings plus an optional parent link.
///
/// Lookup walks the parent chain toward the root; writes and removals touch
/// only this scope. Environments are shared through `Rc` (the interactive
/// prompt keeps the root alive across lines; every function invocation gets a
/// fresh child), so the binding table uses interior mutability.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent:   Option<Rc<Environment>>,
}

impl Environment {
    /// Creates the root scope, preloading the global constants `null` (`0`),
    /// `true` (`1`) and `false` (`0`). Only the root preloads anything.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::root();
    /// assert_eq!(env.get("true").unwrap(), Value::Number(1.0));
    /// assert_eq!(env.get("null").unwrap(), Value::Number(0.0));
    /// ```
    #[must_use]
    pub fn root() -> Rc<Self> {
        let env = Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                                 parent:   None, });

        env.set("null", Value::Number(0.0));
        env.set("true", Value::Number(1.0));
        env.set("false", Value::Number(0.0));

        env
    }

    /// Creates an empty child scope that resolves missing names through
    /// `parent`.
    #[must_use]
    pub fn with_parent(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       parent:   Some(Rc::clone(parent)), })
    }

    /// Returns the value bound to `name`, searching the parent chain.
    ///
    /// # Errors
    /// Fails with `Runtime Error: '<name>' is not defined` when no scope on
    /// the chain has a binding.
    pub fn get(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.get(name),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_owned() }),
        }
    }

    /// Binds or rebinds `name` in this scope only.
    pub fn set(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_owned(), value);
    }

    /// Removes the binding for `name` from this scope only. A binding of the
    /// same name in a parent scope becomes visible again.
    pub fn unset(&self, name: &str) {
        self.bindings.borrow_mut().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_preloads_constants() {
        let root = Environment::root();

        assert_eq!(root.get("null").unwrap(), Value::Number(0.0));
        assert_eq!(root.get("true").unwrap(), Value::Number(1.0));
        assert_eq!(root.get("false").unwrap(), Value::Number(0.0));
    }

    #[test]
    fn child_scopes_preload_nothing_but_resolve_through_parents() {
        let root = Environment::root();
        root.set("x", Value::Number(10.0));

        let child = Environment::with_parent(&root);
        let grandchild = Environment::with_parent(&child);

        assert_eq!(grandchild.get("x").unwrap(), Value::Number(10.0));
        assert_eq!(grandchild.get("true").unwrap(), Value::Number(1.0));
    }

    #[test]
    fn set_writes_the_local_scope_only() {
        let root = Environment::root();
        root.set("x", Value::Number(1.0));

        let child = Environment::with_parent(&root);
        child.set("x", Value::Number(2.0));

        assert_eq!(child.get("x").unwrap(), Value::Number(2.0));
        assert_eq!(root.get("x").unwrap(), Value::Number(1.0));
    }

    #[test]
    fn sibling_scopes_are_isolated() {
        let root = Environment::root();
        let a = Environment::with_parent(&root);
        let b = Environment::with_parent(&root);

        a.set("only_a", Value::Number(1.0));

        assert!(a.get("only_a").is_ok());
        assert!(b.get("only_a").is_err());
    }

    #[test]
    fn unset_removes_locally_and_reexposes_the_parent_binding() {
        let root = Environment::root();
        root.set("x", Value::Number(1.0));

        let child = Environment::with_parent(&root);
        child.set("x", Value::Number(2.0));
        child.unset("x");

        assert_eq!(child.get("x").unwrap(), Value::Number(1.0));

        // Removing a name that only exists in the parent is a no-op here.
        child.unset("x");
        assert_eq!(root.get("x").unwrap(), Value::Number(1.0));
    }

    #[test]
    fn missing_name_renders_the_exact_diagnostic() {
        let root = Environment::root();
        let err = root.get("ghost").unwrap_err();

        assert_eq!(err.to_string(), "Runtime Error: 'ghost' is not defined");
    }
}
