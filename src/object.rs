//! Runtime values produced by the evaluator.
//!
//! [`Object`] is a tagged variant covering every value Monkey programs can
//! produce, plus the two "wrapper" variants ([`Object::ReturnValue`] and
//! [`Object::Error`]) the evaluator uses to propagate control flow and
//! faults as ordinary first-class values rather than host exceptions.
//!
//! Objects are always handled behind an [`ObjectRef`] (`Rc<Object>`) so that
//! `==`/`!=` on booleans and `null` can be implemented as pointer identity
//! against the three canonical singletons in [`singletons`], per the data
//! model's requirement that every evaluation of `true`, `false`, or `null`
//! yields the *same* object.

use crate::ast::BlockStatement;
use crate::environment::Environment;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A reference-counted handle to an [`Object`].
///
/// Cloning an `ObjectRef` is cheap (it bumps a refcount, never deep-copies),
/// which is what lets [`Environment`] and closures share values freely.
pub type ObjectRef = Rc<Object>;

/// A runtime value.
#[derive(Debug)]
pub enum Object {
    Integer(i64),
    String(String),
    Boolean(bool),
    Null,
    /// Wraps the value produced by a `return` statement. Unwound by
    /// [`crate::evaluator::evaluate_program`] at the program root and by
    /// function application at the call boundary; propagated unchanged
    /// through nested blocks in between.
    ReturnValue(ObjectRef),
    /// A runtime fault, carrying a human-readable message. Propagates like
    /// `ReturnValue`, but is never unwrapped: it short-circuits evaluation
    /// all the way out.
    Error(String),
    /// A closure: its parameter names, its body, and the environment that
    /// was active when the `fn` literal was evaluated.
    Function {
        parameters: Vec<String>,
        body: BlockStatement,
        env: Rc<RefCell<Environment>>,
    },
}

impl Object {
    /// The short uppercase type tag used in diagnostics (`"INTEGER"`, etc.).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::String(_) => "STRING",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function { .. } => "FUNCTION",
        }
    }

    /// A human-readable rendering of the value, as printed by the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(value) => value.to_string(),
            Object::String(value) => value.clone(),
            Object::Boolean(value) => value.to_string(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(value) => value.inspect(),
            Object::Error(message) => format!("ERROR: {message}"),
            Object::Function { parameters, body, .. } => {
                format!("fn({}) {{\n{}\n}}", parameters.join(", "), body)
            }
        }
    }

    /// `true` for everything except the `NULL` and `FALSE` singletons.
    /// Integer `0` is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

/// The three canonical singletons: one `Null`, one `Boolean(true)`, one
/// `Boolean(false)`.
///
/// The interpreter is single-threaded end to end (see the evaluator's
/// concurrency notes), so a `thread_local` is sufficient to give every
/// evaluation of a boolean/null literal the same `Rc` pointer, which is the
/// identity comparison (`Rc::ptr_eq`) the `==`/`!=` operators rely on for
/// non-integer operands.
pub mod singletons {
    use super::{Object, ObjectRef};
    use std::rc::Rc;

    thread_local! {
        static TRUE: ObjectRef = Rc::new(Object::Boolean(true));
        static FALSE: ObjectRef = Rc::new(Object::Boolean(false));
        static NULL: ObjectRef = Rc::new(Object::Null);
    }

    pub fn truthy() -> ObjectRef {
        TRUE.with(Rc::clone)
    }

    pub fn falsy() -> ObjectRef {
        FALSE.with(Rc::clone)
    }

    pub fn null() -> ObjectRef {
        NULL.with(Rc::clone)
    }

    /// Returns the shared `TRUE`/`FALSE` singleton for a `bool`.
    pub fn boolean(value: bool) -> ObjectRef {
        if value { truthy() } else { falsy() }
    }
}
