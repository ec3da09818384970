use std::fs;

use pretty_assertions::assert_eq;
use reckon::{
    ast::Program,
    error::{Error, ParseError, RuntimeError},
    evaluate, get_result,
    interpreter::{evaluator::Evaluator, lexer::TokenKind, memory::Memory},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_reckon_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: f64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match get_result(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error for {src:?}, got {other:?}"),
    }
}

#[test]
fn number_literals_evaluate_to_themselves() {
    for (src, expected) in [("0", 0.0), ("42", 42.0), ("3.25", 3.25), ("7.", 7.0), ("007", 7.0)] {
        assert_result(src, expected);
    }
}

#[test]
fn precedence() {
    assert_result("2+3*4", 14.0);
    assert_result("(2+3)*4", 20.0);
    assert_result("2*3+4", 10.0);
    assert_result("2+12/4", 5.0);
    assert_result("2*3^2", 18.0);
}

#[test]
fn power_is_right_associative() {
    assert_result("2^3^2", 512.0);
    assert_result("(2^3)^2", 64.0);
}

#[test]
fn unary_binds_looser_than_power() {
    assert_result("-2^2", -4.0);
    assert_result("(-2)^2", 4.0);
    assert_result("+2^2", 4.0);
    assert_result("-3*2", -6.0);
    assert_result("2*-3", -6.0);
}

#[test]
fn left_associativity() {
    assert_result("8-3-2", 3.0);
    assert_result("8/4/2", 1.0);
    assert_result("1-2+3", 2.0);
}

#[test]
fn power_supports_negative_and_fractional_exponents() {
    assert_result("2^(-1)", 0.5);
    assert_result("9^0.5", 3.0);
    assert_result("2^0", 1.0);
}

#[test]
fn declaration_and_read() {
    assert_result("let x = 5; x + 1", 6.0);
    assert_result("let total_sum = 2\ntotal_sum * 21", 42.0);
    assert_result("let x = 4; ?x", 4.0);
}

#[test]
fn declaration_yields_its_value() {
    assert_result("let x = 3 * 3", 9.0);
}

#[test]
fn redeclaration_fails() {
    assert!(matches!(runtime_error("let x = 1; let x = 2"),
                     RuntimeError::AlreadyDeclared { name, .. } if name == "x"));
}

#[test]
fn assignment_to_undeclared_fails() {
    assert!(matches!(runtime_error("y = 1"),
                     RuntimeError::Undeclared { name, .. } if name == "y"));
}

#[test]
fn reading_undeclared_fails() {
    assert!(matches!(runtime_error("1 + foo"),
                     RuntimeError::Undeclared { name, .. } if name == "foo"));
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(runtime_error("1/0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1/(2-2)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1/-0"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn division_by_small_value_is_finite() {
    let value = get_result("1/0.000001").unwrap();
    assert!(value.is_finite());
    assert!((value - 1_000_000.0).abs() < 1e-6);
}

#[test]
fn statements_thread_the_store() {
    assert_result("let x = 1; x = x + 1; x", 2.0);
    assert_result("let a = 2\nlet b = a * 3\na = b - a\na + b", 10.0);
}

#[test]
fn assignment_yields_its_value() {
    assert_result("let x = 1; x = 10", 10.0);
}

#[test]
fn blank_lines_and_trailing_newlines_are_allowed() {
    assert_result("\n\nlet x = 1\n\n\nx + 1\n", 2.0);
    assert_result("let x = 1;\nx", 1.0);
}

#[test]
fn malformed_input_reports_the_same_error_every_time() {
    let first = get_result("2 + ").unwrap_err();
    let second = get_result("2 + ").unwrap_err();

    assert_eq!(first, second);
    match first {
        Error::Parse(ParseError::UnexpectedToken { found, .. }) => {
            assert_eq!(found, TokenKind::EndOfInput);
        },
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn empty_program_is_a_parse_error() {
    assert!(matches!(get_result(""), Err(Error::Parse(_))));
    assert!(matches!(get_result("   \n "), Err(Error::Parse(_))));
    assert!(matches!(get_result("1;"), Err(Error::Parse(_))));
    assert!(matches!(get_result("1;;2"), Err(Error::Parse(_))));
}

#[test]
fn unexpected_character_is_a_lex_error() {
    let err = get_result("1 + 2 # comment").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.location().offset, 6);
}

#[test]
fn errors_are_displayed_with_location() {
    let err = get_result("let x = 1\nx / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2, offset 12: Division by zero.");
}

#[test]
fn session_persists_between_programs() {
    let mut session = Evaluator::new();

    assert_eq!(evaluate("let x = 1", &mut session).unwrap(), 1.0);
    assert_eq!(evaluate("x = x + 1", &mut session).unwrap(), 2.0);
    assert_eq!(evaluate("x * 10", &mut session).unwrap(), 20.0);
    assert!(evaluate("let x = 0", &mut session).is_err());
}

#[test]
fn failed_statement_does_not_change_the_store() {
    let mut session = Evaluator::new();
    evaluate("let x = 1", &mut session).unwrap();

    assert!(evaluate("x = 1 / 0", &mut session).is_err());
    assert!(evaluate("let y = x + undefined", &mut session).is_err());

    assert_eq!(evaluate("x", &mut session).unwrap(), 1.0);
    assert!(!session.memory().contains("y"));
}

#[test]
fn statements_before_a_failure_keep_their_effect() {
    let mut session = Evaluator::new();

    assert!(evaluate("let a = 1; let b = 1 / 0", &mut session).is_err());
    assert!(session.memory().contains("a"));
    assert!(!session.memory().contains("b"));
}

#[test]
fn parse_errors_evaluate_nothing() {
    let mut session = Evaluator::new();

    assert!(evaluate("let a = 1; let b = ", &mut session).is_err());
    assert!(session.memory().is_empty());
}

#[test]
fn independent_sessions_share_nothing() {
    let mut first = Evaluator::new();
    let mut second = Evaluator::new();

    evaluate("let x = 1", &mut first).unwrap();
    assert!(evaluate("x", &mut second).is_err());
    assert_eq!(evaluate("let x = 2; x", &mut second).unwrap(), 2.0);
    assert_eq!(evaluate("x", &mut first).unwrap(), 1.0);
}

#[test]
fn long_flat_chains_evaluate() {
    assert_result(&vec!["1"; 1000].join("+"), 1000.0);
    assert_result(&vec!["2"; 1000].join("*"), 2f64.powi(1000));
    assert_result(&format!("5000{}", " - 1".repeat(1000)), 4000.0);
    assert_result(&vec!["2 * 3"; 1000].join(" + "), 6000.0);
}

#[test]
fn long_chains_stop_at_the_first_error() {
    let mut session = Evaluator::new();
    evaluate("let x = 0", &mut session).unwrap();

    let source = format!("x = {} + 1 / 0 + missing", vec!["1"; 500].join(" + "));
    assert!(matches!(evaluate(&source, &mut session),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert_eq!(evaluate("x", &mut session).unwrap(), 0.0);
}

#[test]
fn session_resumes_from_saved_memory() {
    let mut session = Evaluator::new();
    evaluate("let rate = 3; let hours = 8", &mut session).unwrap();

    let memory: Memory = session.into_memory();
    assert_eq!(memory.len(), 2);

    let mut resumed = Evaluator::with_memory(memory);
    assert_eq!(evaluate("rate * hours", &mut resumed).unwrap(), 24.0);
    assert!(evaluate("let rate = 4", &mut resumed).is_err());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "a program has at least one statement")]
fn empty_program_is_rejected_in_debug_builds() {
    let _ = Evaluator::new().eval_program(&Program { statements: Vec::new() });
}

#[test]
fn typographic_operators() {
    assert_result("6 × 7", 42.0);
    assert_result("84 ÷ 2", 42.0);
    assert_result("50 − 8", 42.0);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.reckon").unwrap();
    assert_result(&contents, 25.0);
}
