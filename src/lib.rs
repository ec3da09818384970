//! # reckon
//!
//! reckon is a small interpreter for arithmetic expressions with variable
//! bindings, written in Rust. Source text is lexed, parsed by recursive descent
//! and evaluated by walking the syntax tree.
//!
//! ```
//! use reckon::get_result;
//!
//! assert_eq!(get_result("let x = 5; x + 1").unwrap(), 6.0);
//! assert_eq!(get_result("2 ^ 3 ^ 2").unwrap(), 512.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{evaluator::Evaluator, lexer::Lexer, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement` and `Program` types that
/// represent the syntactic structure of source code as a tree, along with the
/// `Location` every node carries. The AST is built by the parser and traversed
/// by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error carries the source location it refers to and a message that
/// can be shown to the user directly.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together the lexer, the parser, the variable store and
/// the evaluator.
pub mod interpreter;

/// Parses source text into a program.
///
/// # Errors
/// Returns `Error::Lex` for a character that starts no token and
/// `Error::Parse` for malformed input.
///
/// # Examples
/// ```
/// use reckon::{error::Error, parse};
///
/// assert_eq!(parse("let x = 1\nx").unwrap().statements.len(), 2);
/// assert!(matches!(parse("2 + "), Err(Error::Parse(_))));
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let program = Parser::new(Lexer::new(source))?.parse()?;
    debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// Parses and evaluates `source` within an existing session.
///
/// Variables declared by earlier calls on the same `evaluator` remain
/// visible. Nothing is evaluated if the source fails to parse.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use reckon::{evaluate, interpreter::evaluator::Evaluator};
///
/// let mut session = Evaluator::new();
/// evaluate("let x = 1", &mut session).unwrap();
/// assert_eq!(evaluate("x = x + 1", &mut session).unwrap(), 2.0);
/// ```
pub fn evaluate(source: &str, evaluator: &mut Evaluator) -> Result<f64, Error> {
    let program = parse(source)?;
    Ok(evaluator.eval_program(&program)?)
}

/// Returns the result of evaluating `source` in a fresh session.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use reckon::{error::{Error, RuntimeError}, get_result};
///
/// assert_eq!(get_result("(2 + 3) * 4").unwrap(), 20.0);
///
/// // 'y' was never declared.
/// let err = get_result("y = 1").unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::Undeclared { .. })));
/// ```
pub fn get_result(source: &str) -> Result<f64, Error> {
    evaluate(source, &mut Evaluator::new())
}
