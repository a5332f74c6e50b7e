//! Prefix and infix operator semantics.

use super::error;
use crate::object::{Object, ObjectRef, singletons};
use std::rc::Rc;

pub(super) fn evaluate_prefix(operator: &str, right: &ObjectRef) -> ObjectRef {
    match operator {
        "!" => singletons::boolean(!right.is_truthy()),
        "-" => evaluate_minus_prefix(right),
        _ => error(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn evaluate_minus_prefix(right: &ObjectRef) -> ObjectRef {
    match right.as_ref() {
        Object::Integer(value) => Rc::new(Object::Integer(-value)),
        other => error(format!("unknown operator: -{}", other.type_name())),
    }
}

pub(super) fn evaluate_infix(operator: &str, left: &ObjectRef, right: &ObjectRef) -> ObjectRef {
    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => evaluate_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) if operator == "+" => {
            Rc::new(Object::String(format!("{l}{r}")))
        }
        (Object::String(_), Object::String(_)) => {
            error(format!("unknown operator: STRING {operator} STRING"))
        }
        _ if is_equality_operator(operator) && neither_is_integer(left, right) => {
            let identical = Rc::ptr_eq(left, right);
            singletons::boolean(if operator == "==" { identical } else { !identical })
        }
        _ if left.type_name() != right.type_name() => error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn is_equality_operator(operator: &str) -> bool {
    operator == "==" || operator == "!="
}

fn neither_is_integer(left: &ObjectRef, right: &ObjectRef) -> bool {
    !matches!(left.as_ref(), Object::Integer(_)) && !matches!(right.as_ref(), Object::Integer(_))
}

fn evaluate_integer_infix(operator: &str, left: i64, right: i64) -> ObjectRef {
    match operator {
        "+" => Rc::new(Object::Integer(left + right)),
        "-" => Rc::new(Object::Integer(left - right)),
        "*" => Rc::new(Object::Integer(left * right)),
        "/" => {
            if right == 0 {
                error("division by zero".to_string())
            } else {
                Rc::new(Object::Integer(left / right))
            }
        }
        "<" => singletons::boolean(left < right),
        ">" => singletons::boolean(left > right),
        "==" => singletons::boolean(left == right),
        "!=" => singletons::boolean(left != right),
        _ => error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}
