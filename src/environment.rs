//! Lexically scoped name→value bindings with parent chaining.
//!
//! An `Environment` is shared by reference (`Rc<RefCell<_>>`) rather than
//! copied, because the spec requires two things an immutable, copy-on-write
//! map cannot give us together: (1) a closure must keep observing bindings
//! added to its defining scope *after* the closure was created (needed for
//! mutual recursion at the top level), and (2) extending a scope on function
//! entry must not disturb the caller's scope. A single `Rc<RefCell<_>>`
//! chain gives both: each scope is its own node, `set` mutates only the
//! innermost node in place, and every `Function` value holds a clone of the
//! `Rc` pointing at the scope it closed over.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

struct Inner {
    bindings: HashMap<Rc<str>, Rc<Value>>,
    outer: Option<Environment>,
}

/// A lexical scope. Cheap to clone (an `Rc` bump); clones share the same
/// underlying bindings, which is the point — see module docs.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Inner>>);

impl Environment {
    /// A fresh top-level scope with no parent.
    pub fn new() -> Self {
        log::trace!("creating top-level environment");
        Environment(Rc::new(RefCell::new(Inner {
            bindings: HashMap::new(),
            outer: None,
        })))
    }

    /// A new scope nested inside `outer`, as created on function entry.
    pub fn enclosed(outer: &Environment) -> Self {
        log::trace!("creating enclosed environment");
        Environment(Rc::new(RefCell::new(Inner {
            bindings: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Look up `name` in this scope, then recursively in `outer` scopes.
    pub fn get(&self, name: &str) -> Option<Rc<Value>> {
        let inner = self.0.borrow();
        if let Some(value) = inner.bindings.get(name) {
            return Some(Rc::clone(value));
        }
        inner.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` to `value` in this scope, overwriting any existing
    /// same-named binding in this scope only — outer scopes are untouched.
    pub fn set(&self, name: Rc<str>, value: Rc<Value>) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Two environment handles are the same scope iff they point at the
    /// same underlying node — content equality is never what callers want
    /// here (two freshly-created, empty scopes are not interchangeable).
    pub fn same_scope_as(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
