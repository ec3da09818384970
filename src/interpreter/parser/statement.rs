use crate::{
    ast::{Location, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Tokens that may end a statement.
const SEPARATORS: [TokenKind; 3] = [TokenKind::Semicolon, TokenKind::NewLine, TokenKind::EndOfInput];

impl Parser<'_> {
    /// Parses a sequence of statements up to the end of input.
    ///
    /// Every statement must be followed by a separator: `;`, a newline, or the
    /// end of input. Blank lines between statements are ignored and trailing
    /// newlines end the program, but a `;` must always be followed by another
    /// statement.
    ///
    /// Grammar: `program := statement (separator statement)* separator?`
    ///
    /// # Returns
    /// A [`Program`] holding the statements in source order.
    ///
    /// # Errors
    /// Returns a `ParseError` if a statement is malformed, missing, or not
    /// followed by a separator.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        loop {
            statements.push(self.parse_statement()?);

            let separator = self.eat(&SEPARATORS)?;
            match separator.token {
                Token::EndOfInput => break,
                Token::NewLine => {
                    self.skip_newlines()?;
                    if self.check(TokenKind::EndOfInput) {
                        break;
                    }
                },
                _ => self.skip_newlines()?,
            }
        }

        Ok(Program { statements })
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a declaration, when the current token is `let`;
    /// - an assignment, when the current token is an identifier and the next
    ///   significant token is `=`;
    /// - a bare formula otherwise.
    ///
    /// Telling an assignment from a formula needs one token of lookahead past
    /// the identifier. That token is peeked from the lexer, never consumed.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.token.kind() {
            TokenKind::Let => self.parse_declaration(),
            TokenKind::Identifier if self.lexer.peek()?.token == Token::Equals => {
                self.parse_assignment()
            },
            _ => {
                let location = self.current.location;
                let expr = self.parse_formula()?;
                Ok(Statement::Expression { expr, location })
            },
        }
    }

    /// Parses a variable declaration statement.
    ///
    /// A declaration has the form `let <identifier> = <formula>`.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the identifier is missing,
    /// - `=` is missing,
    /// - the formula is malformed.
    fn parse_declaration(&mut self) -> ParseResult<Statement> {
        self.eat(&[TokenKind::Let])?;
        let (name, location) = self.parse_identifier()?;
        self.eat(&[TokenKind::Equals])?;
        let value = self.parse_formula()?;

        Ok(Statement::Declaration { name,
                                    value,
                                    location })
    }

    /// Parses an assignment statement of the form `<identifier> = <formula>`.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, location) = self.parse_identifier()?;
        self.eat(&[TokenKind::Equals])?;
        let value = self.parse_formula()?;

        Ok(Statement::Assignment { name,
                                   value,
                                   location })
    }

    /// Parses a plain identifier and returns its name and location.
    fn parse_identifier(&mut self) -> ParseResult<(String, Location)> {
        let Spanned { token, location } = self.eat(&[TokenKind::Identifier])?;

        match token {
            Token::Identifier(name) => Ok((name, location)),
            other => Err(ParseError::UnexpectedToken { expected: vec![TokenKind::Identifier],
                                                       found: other.kind(),
                                                       location }),
        }
    }
}
