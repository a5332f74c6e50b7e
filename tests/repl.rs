//! End-to-end tests for the REPL loop: bindings must persist across lines
//! sharing one environment, and a bad line must not abort the session.

use monkey::repl;
use std::io::Cursor;

fn run_session(input: &str) -> String {
    let mut output = Vec::new();
    repl::start(Cursor::new(input.as_bytes()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn let_bindings_persist_across_lines() {
    let transcript = run_session("let a = 5;\na + 1;\n");
    assert!(transcript.contains("5"));
    assert!(transcript.contains("6"));
}

#[test]
fn a_parse_error_on_one_line_does_not_end_the_session() {
    let transcript = run_session("let x 5;\n5 + 5;\n");
    assert!(transcript.contains("parse error: Expected next token to be =, got INT instead"));
    assert!(transcript.contains("10"));
}

#[test]
fn a_runtime_error_is_printed_and_the_session_continues() {
    let transcript = run_session("5 + true;\n1 + 1;\n");
    assert!(transcript.contains("ERROR: unknown operator: INTEGER + BOOLEAN"));
    assert!(transcript.contains("2"));
}

#[test]
fn closures_survive_across_repl_lines() {
    let transcript = run_session(
        "let newAdder = fn(x) { fn(y) { x + y } };\nlet addTwo = newAdder(2);\naddTwo(3);\n",
    );
    assert!(transcript.contains("5"));
}

#[test]
fn empty_input_exits_cleanly() {
    let transcript = run_session("");
    assert_eq!(transcript, ">> ");
}
