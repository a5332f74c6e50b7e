//! End-to-end tests for string literals and concatenation.

use monkey::environment::Environment;
use monkey::evaluator::evaluate_program;
use monkey::lexer::Lexer;
use monkey::parser::Parser;

fn run(source: &str) -> String {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors for {source:?}: {:?}",
        parser.errors()
    );
    let env = Environment::new_root();
    evaluate_program(&program, &env).inspect()
}

#[test]
fn concatenation_with_plus() {
    assert_eq!(run(r#""Hello" + ", " + "World!""#), "Hello, World!");
}

#[test]
fn strings_have_no_interpreted_escapes() {
    // The lexer reads raw content between quotes; a literal backslash-n
    // stays two characters, it is not collapsed into a newline.
    assert_eq!(run(r#""line1\nline2""#), "line1\\nline2");
}

#[test]
fn empty_string_literal() {
    assert_eq!(run(r#""""#), "");
}

#[test]
fn string_subtraction_is_a_type_error() {
    assert_eq!(
        run(r#""a" - "b""#),
        "ERROR: unknown operator: STRING - STRING"
    );
}

#[test]
fn comparing_a_string_to_an_integer_is_a_type_mismatch() {
    assert_eq!(
        run(r#""5" == 5"#),
        "ERROR: type mismatch: STRING == INTEGER"
    );
}

#[test]
fn strings_bound_through_let_and_functions() {
    let source = "\
let greet = fn(name) { \"hi \" + name };
greet(\"there\");";
    assert_eq!(run(source), "hi there");
}
