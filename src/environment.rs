//! Lexical scope for the evaluator.
//!
//! An [`Environment`] is a name→value map with an optional link to an
//! *outer* environment. Lookup walks outward through the chain; assignment
//! always writes to the innermost frame. Function values capture the
//! environment active when their `fn` literal was evaluated (see
//! [`crate::object::Object::Function`]); calling one creates a new frame
//! enclosing that captured environment, not the caller's. This is what
//! makes closures work.
//!
//! Frames are shared via `Rc<RefCell<_>>` rather than owned outright: a
//! closure and the frame it was defined in may need to be mutated (new
//! `let`s) and read from multiple call sites concurrently with the rest of
//! the tree walk, which `Rc<RefCell<_>>` allows without a borrow checker
//! fight. A self-referential binding (`let f = fn() { f() };`) creates a
//! reference cycle between the frame's `f` slot and the function's
//! captured environment; under `Rc` this leaks for the life of the
//! process, a trade-off the interpreter's concurrency/resource model
//! accepts explicitly rather than works around.

use crate::object::ObjectRef;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single lexical scope frame.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, ObjectRef>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a fresh root environment with no parent.
    pub fn new_root() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates an empty environment enclosing `outer`.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name` in this frame, then recursively in the parent chain.
    pub fn get(&self, name: &str) -> Option<ObjectRef> {
        if let Some(value) = self.store.get(name) {
            return Some(Rc::clone(value));
        }
        self.outer.as_ref()?.borrow().get(name)
    }

    /// Binds `name` to `value` in this frame only; never writes to a parent.
    pub fn set(&mut self, name: impl Into<String>, value: ObjectRef) {
        self.store.insert(name.into(), value);
    }
}
