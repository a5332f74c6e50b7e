//! Statement nodes for the Monkey AST.

use super::Expression;
use std::fmt;

/// A statement in the Monkey language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: String, value: Expression },
    /// `return <value>;`
    Return { value: Expression },
    /// An expression evaluated for its value (and, at the top level, as the
    /// program's result): `<expression>;`
    Expression(Expression),
    /// A bare `{ ... }` block, used standalone inside `if`/function bodies
    /// rather than as a top-level statement in practice, but representable
    /// either way since `Block` is one of the `Statement` variants.
    Block(BlockStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Expression(expression) => write!(f, "{expression}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

/// An ordered sequence of statements, shared by `if` consequences/
/// alternatives and function bodies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    /// Concatenation of the contained statements' own `Display` output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
