/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*`, `/` and `^` to two numbers, including the
/// division-by-zero check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix identity and negation.
pub mod unary;

/// Core evaluation logic and session state.
///
/// Contains the `Evaluator`, which owns the variable store and walks
/// programs, statements and expressions.
pub mod core;

pub use self::core::{EvalResult, Evaluator};
