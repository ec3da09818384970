/// Lexical errors.
///
/// Raised by the lexer when it meets a character that cannot start a token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens and expressions that nest too deeply.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: redeclared
/// and undeclared variables, and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Location;

/// Any error the interpreter can report for a piece of source text.
///
/// Every variant is fatal to the current evaluation. The message of each
/// variant is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source contains a character that does not start any token.
    Lex(LexError),
    /// The tokens do not form a valid program.
    Parse(ParseError),
    /// The program is well formed but failed while running.
    Runtime(RuntimeError),
}

impl Error {
    /// Gets the source location of the error.
    ///
    /// ## Example
    /// ```
    /// use reckon::get_result;
    ///
    /// let err = get_result("1 + $").unwrap_err();
    /// assert_eq!(err.location().offset, 4);
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Lex(e) => e.location(),
            Self::Parse(e) => e.location(),
            Self::Runtime(e) => e.location(),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::Lex(e) => Self::Lex(e),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
