//! Drives the lex → parse → eval pipeline for the `monkey run` subcommand.
//!
//! A thin orchestration layer between the CLI and the library, returning a
//! hand-rolled error enum (not `thiserror`) the same way the rest of this
//! crate's error types are built.

use crate::diagnostics;
use crate::environment::Environment;
use crate::evaluator::evaluate_program;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::Parser;
use std::fmt;
use std::path::Path;

/// An error that stopped `monkey run` before it could finish.
#[derive(Debug)]
pub enum DriverError {
    /// The source file could not be read.
    Io(std::io::Error),
    /// Parsing failed; diagnostics have already been printed to stderr.
    ParseFailed,
    /// Evaluation produced a runtime `Error`; it has already been printed.
    RuntimeFailed,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(err) => write!(f, "could not read source file: {err}"),
            DriverError::ParseFailed => write!(f, "parsing failed"),
            DriverError::RuntimeFailed => write!(f, "evaluation failed"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Reads `path`, runs it through the full pipeline, and prints the
/// program's final value to stdout.
///
/// On a parse or runtime failure, the relevant diagnostics are printed to
/// stderr before returning `Err`; the caller only needs to set the process
/// exit code.
pub fn run_file(path: &Path) -> Result<(), DriverError> {
    let source = std::fs::read_to_string(path).map_err(DriverError::Io)?;
    let filename = path.display().to_string();

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        diagnostics::report_parse_errors(&filename, &source, parser.errors());
        return Err(DriverError::ParseFailed);
    }

    let env = Environment::new_root();
    let result = evaluate_program(&program, &env);

    if let Object::Error(message) = result.as_ref() {
        diagnostics::report_runtime_error(&filename, &source, message);
        return Err(DriverError::RuntimeFailed);
    }

    println!("{}", result.inspect());
    Ok(())
}
