//! The Monkey programming language interpreter library.
//!
//! This library provides the core components of the Monkey interpreter:
//! lexical analysis, parsing, and tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Pratt parser producing an AST
//! - [`object`] - Runtime value representation
//! - [`environment`] - Lexical scope chain
//! - [`evaluator`] - Tree-walking evaluator
//! - [`driver`] - Source-to-result pipeline used by the CLI and REPL
//! - [`diagnostics`] - Pretty-printed error reporting
//!
//! # Example
//!
//! ```
//! use monkey::lexer::Lexer;
//! use monkey::parser::Parser;
//! use monkey::environment::Environment;
//! use monkey::evaluator::evaluate_program;
//!
//! let source = "let a = 5; let b = a + 5; b;";
//!
//! let lexer = Lexer::new(source);
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! let env = Environment::new_root();
//! let result = evaluate_program(&program, &env);
//! assert_eq!(result.inspect(), "10");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod driver;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;
