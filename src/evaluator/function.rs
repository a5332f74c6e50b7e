//! Closure capture and call application.
//!
//! Calling a [`Object::Function`] creates a new environment enclosing the
//! function's *captured* environment (not the caller's) and binds
//! parameters there before evaluating the body. Binding in a freshly
//! created child environment (rather than mutating the captured one
//! directly) is what keeps closures from corrupting each other; see the
//! module docs on the parameter-binding pitfall this avoids.

use super::{Env, evaluate_block_statement, error};
use crate::environment::Environment;
use crate::object::{Object, ObjectRef};
use std::cell::Cell;

thread_local! {
    static CALL_DEPTH: Cell<u32> = const { Cell::new(0) };
}

pub(super) fn apply_function(function: &ObjectRef, args: Vec<ObjectRef>) -> ObjectRef {
    match function.as_ref() {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let depth = CALL_DEPTH.with(|d| {
                d.set(d.get() + 1);
                d.get()
            });
            log::debug!(
                "calling function/{} with {} argument(s) at depth {depth}",
                parameters.len(),
                args.len()
            );

            let call_env = extend_function_env(parameters, env, args);
            let result = evaluate_block_statement(body, &call_env);

            CALL_DEPTH.with(|d| d.set(d.get() - 1));
            unwrap_return_value(result)
        }
        other => error(format!("not a function: {}", other.type_name())),
    }
}

fn extend_function_env(parameters: &[String], captured: &Env, args: Vec<ObjectRef>) -> Env {
    let call_env = Environment::new_enclosed(captured.clone());
    {
        let mut frame = call_env.borrow_mut();
        for (parameter, argument) in parameters.iter().zip(args) {
            frame.set(parameter.clone(), argument);
        }
    }
    call_env
}

fn unwrap_return_value(value: ObjectRef) -> ObjectRef {
    match value.as_ref() {
        Object::ReturnValue(inner) => inner.clone(),
        _ => value,
    }
}
