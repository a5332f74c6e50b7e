//! Expression nodes for the Monkey AST.

use super::BlockStatement;
use std::fmt;

/// An expression in the Monkey language.
///
/// Recursive variants box their children so the enum stays a fixed size;
/// ownership is strictly tree-shaped (no node is shared).
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A variable reference, e.g. `foobar`.
    Identifier(String),
    /// An integer literal, e.g. `5`.
    IntegerLiteral(i64),
    /// A string literal, e.g. `"hello"`. Holds the unescaped content.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// A prefix operator applied to one operand, e.g. `!x`, `-5`.
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    /// A binary operator applied to two operands, e.g. `x + y`.
    Infix {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    /// `if (cond) { consequence } else { alternative }`. `alternative` is
    /// `None` when there is no `else` branch.
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// `fn(params) { body }`.
    FunctionLiteral {
        parameters: Vec<String>,
        body: BlockStatement,
    },
    /// A function call, e.g. `add(1, 2)`.
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl fmt::Display for Expression {
    /// Renders the canonical, fully-parenthesized form used to pin operator
    /// precedence in tests: every subexpression is wrapped except atoms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{name}"),
            Expression::IntegerLiteral(value) => write!(f, "{value}"),
            Expression::StringLiteral(value) => write!(f, "{value}"),
            Expression::BooleanLiteral(value) => write!(f, "{value}"),
            Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                for parameter in parameters {
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            }
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
        }
    }
}
