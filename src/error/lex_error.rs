use crate::ast::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        location:  Location,
    },
}

impl LexError {
    /// Gets the source location of the error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedCharacter { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, location } => {
                write!(f, "Error on {location}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
