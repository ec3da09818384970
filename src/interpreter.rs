/// The evaluator module walks the AST and computes results.
///
/// The evaluator traverses a parsed program statement by statement, computes
/// the value of every expression, and reads and writes variables through the
/// session's variable store. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes with left-to-right operand order.
/// - Threads one variable store through successive programs of a session.
/// - Reports runtime errors such as division by zero or undeclared variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time on
/// demand: numbers, identifiers, the `let` keyword, operators, parentheses,
/// separators and whitespace. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Offers a non-consuming `peek` for the parser's single lookahead.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The variable store.
///
/// A mapping from identifier to value with declare, write and read operations
/// that fail on redeclared or undeclared names.
pub mod memory;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs a program by
/// recursive descent over a fixed precedence grammar.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Reproduces operator precedence and associativity exactly.
/// - Validates syntax, reporting the accepted and actual tokens with location
///   info.
pub mod parser;
