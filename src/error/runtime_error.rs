use crate::ast::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to declare a variable that already exists.
    AlreadyDeclared {
        /// The name of the variable.
        name:     String,
        /// Where the declaration occurred.
        location: Location,
    },
    /// Tried to read or assign a variable that was never declared.
    Undeclared {
        /// The name of the variable.
        name:     String,
        /// Where the access occurred.
        location: Location,
    },
    /// Attempted division by exactly zero.
    DivisionByZero {
        /// Location of the `/` operator.
        location: Location,
    },
}

impl RuntimeError {
    /// Gets the source location of the error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::AlreadyDeclared { location, .. }
            | Self::Undeclared { location, .. }
            | Self::DivisionByZero { location } => *location,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDeclared { name, location } => {
                write!(f, "Error on {location}: Variable '{name}' is already declared.")
            },
            Self::Undeclared { name, location } => {
                write!(f, "Error on {location}: Undeclared variable '{name}'.")
            },
            Self::DivisionByZero { location } => write!(f, "Error on {location}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
