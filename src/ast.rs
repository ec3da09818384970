/// A position in the source text.
///
/// Every token and every AST node carries the location of the token that
/// produced it, so errors can point back at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// 1-based line number.
    pub line:   usize,
    /// Byte offset from the start of the source.
    pub offset: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions always produce a number. Every non-leaf node owns its children,
/// so the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Location of the number token.
        location: Location,
    },
    /// A prefix `+` or `-` applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Location of the operator token.
        location: Location,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator token.
        location: Location,
    },
    /// Reads the current value of a variable.
    Read {
        /// Name of the variable.
        name:     String,
        /// Location of the identifier token.
        location: Location,
    },
}

impl Expr {
    /// Gets the source location from `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::{Expr, Location};
    ///
    /// let expr = Expr::Read { name:     "x".to_string(),
    ///                         location: Location::new(2, 7), };
    ///
    /// assert_eq!(expr.location().line, 2);
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Number { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::BinaryOp { location, .. }
            | Self::Read { location, .. } => *location,
        }
    }
}

/// Represents a single statement of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A bare expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Location of the first token of the expression.
        location: Location,
    },
    /// Introduces a new variable with `let`.
    Declaration {
        /// The name of the variable.
        name:     String,
        /// The initial value of the variable.
        value:    Expr,
        /// Location of the identifier token.
        location: Location,
    },
    /// Rebinds an existing variable.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Location of the identifier token.
        location: Location,
    },
}

impl Statement {
    /// Gets the source location from `self`.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Expression { location, .. }
            | Self::Declaration { location, .. }
            | Self::Assignment { location, .. } => *location,
        }
    }
}

/// A parsed program: one or more statements in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
