use crate::{ast::Location, error::LexError, interpreter::lexer::TokenKind};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The current token is not one of the tokens accepted at this point.
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The token kind actually found.
        found:    TokenKind,
        /// Where the unexpected token starts.
        location: Location,
    },
    /// The expression nests deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Where the limit was exceeded.
        location: Location,
    },
    /// The lexer failed while the parser was pulling tokens.
    Lex(LexError),
}

impl ParseError {
    /// Gets the source location of the error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedToken { location, .. } | Self::NestingTooDeep { location, .. } => {
                *location
            },
            Self::Lex(e) => e.location(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    location, } => {
                let expected = expected.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "Error on {location}: Expected {expected}, got {found}.")
            },
            Self::NestingTooDeep { limit, location } => write!(f,
                                                               "Error on {location}: Expression nests deeper than {limit} levels."),
            Self::Lex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
