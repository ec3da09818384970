/// The parser state and its primitives.
///
/// Holds the `Parser` struct, the one-token lookahead, the `eat` primitive and
/// the nesting guard shared by all grammar rules.
pub mod core;

/// Program and statement parsing.
///
/// Splits the input into statements and tells declarations, assignments and
/// bare expressions apart.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the `formula`, `term` and `power` rules with their
/// associativity.
pub mod binary;

/// Unary and atomic expression parsing.
///
/// Handles prefix `+`/`-`, numbers, variable reads and parenthesized
/// formulas.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser};
