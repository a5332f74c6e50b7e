//! Tree-walking evaluator for the Monkey programming language.
//!
//! [`evaluate_program`] is the single entry point: it walks a
//! [`crate::ast::Program`] in a root [`Environment`] and returns the
//! [`Object`] the program evaluates to. The walk is recursive and
//! single-threaded; there is no suspension point and no state beyond the
//! call stack and the environment chain.
//!
//! Two invariants thread through every dispatch arm:
//!
//! - **Error short-circuit.** Every intermediate result is checked with
//!   [`Object::is_error`]; the first `Error` value produced anywhere in a
//!   statement list, operand pair, or argument list is returned immediately
//!   without further work.
//! - **Return unwinding.** A `return` statement produces
//!   `Object::ReturnValue`, which propagates up through nested
//!   [`crate::ast::BlockStatement`]s *without* being unwrapped; only the
//!   `Program` root ([`evaluate_statements`]) and a function call boundary
//!   ([`apply_function`]) unwrap it. This is what makes `return` inside
//!   nested `if`s exit the whole function rather than just the inner block.
//!
//! # Module structure
//!
//! - [`operators`] - Prefix/infix operator semantics
//! - [`function`] - Closure capture and call application
//! - `tests` - Unit tests (test-only)

mod function;
mod operators;


use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::environment::Environment;
use crate::object::{Object, ObjectRef, singletons};
use std::cell::RefCell;
use std::rc::Rc;

type Env = Rc<RefCell<Environment>>;

/// Evaluates a whole program in `env`, returning its final value.
///
/// Unwraps a top-level `return` immediately (a `return` at the program
/// root simply produces that value) and short-circuits on the first
/// `Error`.
pub fn evaluate_program(program: &Program, env: &Env) -> ObjectRef {
    evaluate_statements(&program.statements, env)
}

fn evaluate_statements(statements: &[Statement], env: &Env) -> ObjectRef {
    let mut result = singletons::null();

    for statement in statements {
        result = evaluate_statement(statement, env);

        match result.as_ref() {
            Object::ReturnValue(value) => return Rc::clone(value),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements without unwrapping `ReturnValue`; it
/// propagates upward so the enclosing `Program` or function call unwraps
/// it instead. `Error` still short-circuits immediately.
fn evaluate_block_statement(block: &BlockStatement, env: &Env) -> ObjectRef {
    let mut result = singletons::null();

    for statement in &block.statements {
        result = evaluate_statement(statement, env);

        if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn evaluate_statement(statement: &Statement, env: &Env) -> ObjectRef {
    match statement {
        Statement::Expression(expression) => evaluate_expression(expression, env),
        Statement::Return { value } => {
            let value = evaluate_expression(value, env);
            if value.is_error() {
                return value;
            }
            Rc::new(Object::ReturnValue(value))
        }
        Statement::Let { name, value } => {
            let value = evaluate_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.clone(), value);
            singletons::null()
        }
        Statement::Block(block) => evaluate_block_statement(block, env),
    }
}

fn evaluate_expression(expression: &Expression, env: &Env) -> ObjectRef {
    match expression {
        Expression::IntegerLiteral(value) => Rc::new(Object::Integer(*value)),
        Expression::StringLiteral(value) => Rc::new(Object::String(value.clone())),
        Expression::BooleanLiteral(value) => singletons::boolean(*value),
        Expression::Identifier(name) => evaluate_identifier(name, env),
        Expression::Prefix { operator, right } => {
            let right = evaluate_expression(right, env);
            if right.is_error() {
                return right;
            }
            operators::evaluate_prefix(operator, &right)
        }
        Expression::Infix {
            left,
            operator,
            right,
        } => {
            let left = evaluate_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = evaluate_expression(right, env);
            if right.is_error() {
                return right;
            }
            operators::evaluate_infix(operator, &left, &right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => evaluate_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral { parameters, body } => Rc::new(Object::Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }),
        Expression::Call {
            function,
            arguments,
        } => evaluate_call_expression(function, arguments, env),
    }
}

fn evaluate_identifier(name: &str, env: &Env) -> ObjectRef {
    match env.borrow().get(name) {
        Some(value) => value,
        None => error(format!("identifier not found: {name}")),
    }
}

fn evaluate_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Env,
) -> ObjectRef {
    let condition = evaluate_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        evaluate_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        evaluate_block_statement(alternative, env)
    } else {
        singletons::null()
    }
}

fn evaluate_call_expression(function: &Expression, arguments: &[Expression], env: &Env) -> ObjectRef {
    let function = evaluate_expression(function, env);
    if function.is_error() {
        return function;
    }

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let evaluated = evaluate_expression(argument, env);
        if evaluated.is_error() {
            return evaluated;
        }
        args.push(evaluated);
    }

    function::apply_function(&function, args)
}

pub(crate) fn error(message: String) -> ObjectRef {
    Rc::new(Object::Error(message))
}
