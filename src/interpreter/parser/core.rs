use crate::{
    ast::{Location, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest syntax tree the parser will build.
///
/// Parentheses, `^` towers and prefix operators each add one level. Both the
/// parser and the evaluator recurse once per level, so this bounds their
/// stack use. Chains of `+ -` or `* /` do not count.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser over a pull-based [`Lexer`].
///
/// The parser keeps exactly one token of lookahead in `current`. The only
/// other lookahead is [`Lexer::peek`], used to tell an assignment from a bare
/// expression; every grammar rule otherwise consumes tokens strictly left to
/// right.
pub struct Parser<'source> {
    pub(super) lexer:   Lexer<'source>,
    pub(super) current: Spanned,
    depth:              usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser and primes it with the first significant token.
    ///
    /// Leading whitespace and blank lines are skipped.
    ///
    /// # Errors
    /// Returns a `ParseError::Lex` if the first token cannot be scanned.
    pub fn new(lexer: Lexer<'source>) -> ParseResult<Self> {
        let mut parser = Self { lexer,
                                current: Spanned { token:    Token::StartOfInput,
                                                   location: Location::new(1, 0), },
                                depth: 0 };
        parser.eat(&[TokenKind::StartOfInput])?;
        parser.skip_newlines()?;
        Ok(parser)
    }

    /// Parses the whole input as a program.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error found.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let program = Parser::new(Lexer::new("let x = 1; x")).unwrap().parse().unwrap();
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    pub fn parse(mut self) -> ParseResult<Program> {
        self.parse_program()
    }

    /// The token currently under the parser's cursor.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current.token
    }

    /// Consumes the current token if its kind is one of `expected`.
    ///
    /// The cursor then moves to the next non-whitespace token. Newlines are
    /// kept, since they separate statements.
    ///
    /// # Returns
    /// The consumed token and its location.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` naming `expected` and the actual kind.
    /// - `ParseError::Lex` if the next token cannot be scanned.
    pub fn eat(&mut self, expected: &[TokenKind]) -> ParseResult<Spanned> {
        if !expected.contains(&self.current.token.kind()) {
            return Err(self.unexpected(expected));
        }

        let mut next = self.lexer.next_token()?;
        while next.token == Token::Whitespace {
            next = self.lexer.next_token()?;
        }

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current.token.kind() == kind
    }

    /// Consumes any run of newline tokens.
    pub(super) fn skip_newlines(&mut self) -> ParseResult<()> {
        while self.check(TokenKind::NewLine) {
            self.eat(&[TokenKind::NewLine])?;
        }
        Ok(())
    }

    /// Builds the error for a current token that is not in `expected`.
    pub(super) fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_vec(),
                                      found:    self.current.token.kind(),
                                      location: self.current.location, }
    }

    /// Descends one level into the syntax tree.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` once [`MAX_NESTING_DEPTH`] is
    /// reached.
    pub(super) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    location: self.current.location, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Climbs back up one level of the syntax tree.
    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }
}
