//! The interactive `monkey repl` prompt.
//!
//! Each line is lexed and parsed on its own, but every line shares one root
//! [`Environment`], so `let` bindings and function definitions persist
//! across prompts. There is no stable source file to anchor a byte range
//! against here, so diagnostics fall back to the plain `parse error:`
//! strings rather than the `ariadne` report boxes `run` gets.

use crate::environment::Environment;
use crate::evaluator::evaluate_program;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::Parser;
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">> ";

/// Runs the REPL loop until stdin is closed (EOF) or an I/O error occurs.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new_root();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for message in parser.errors() {
                writeln!(output, "parse error: {message}")?;
            }
            continue;
        }

        let result = evaluate_program(&program, &env);
        match result.as_ref() {
            Object::Error(message) => writeln!(output, "ERROR: {message}")?,
            _ => writeln!(output, "{}", result.inspect())?,
        }
    }
}
