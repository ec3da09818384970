use logos::Logos;

use crate::{ast::Location, error::LexError};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Primes the parser before the first real token. Never scanned.
    StartOfInput,
    /// Returned once the source is exhausted. Never scanned.
    EndOfInput,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,
    /// `let`, only when directly followed by whitespace.
    #[regex(r"let[ \t\r\x0B\x0C]")]
    Let,
    /// Identifier tokens; variable names such as `x` or `total_sum`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `?name` reads a variable.
    #[regex(r"\?[a-zA-Z_]+", |lex| lex.slice()[1..].to_string())]
    Retrieval(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-` or `−`
    #[token("-")]
    #[token("−")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// The kind of a [`Token`], without its payload.
///
/// Used by the parser to describe which tokens it accepts at a given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartOfInput,
    EndOfInput,
    NewLine,
    Whitespace,
    Let,
    Identifier,
    Number,
    Retrieval,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Equals,
    Semicolon,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(1.5).kind(), TokenKind::Number);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::StartOfInput => TokenKind::StartOfInput,
            Self::EndOfInput => TokenKind::EndOfInput,
            Self::NewLine => TokenKind::NewLine,
            Self::Whitespace => TokenKind::Whitespace,
            Self::Let => TokenKind::Let,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Number(_) => TokenKind::Number,
            Self::Retrieval(_) => TokenKind::Retrieval,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Caret => TokenKind::Caret,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Equals => TokenKind::Equals,
            Self::Semicolon => TokenKind::Semicolon,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::StartOfInput => "start of input",
            Self::EndOfInput => "end of input",
            Self::NewLine => "newline",
            Self::Whitespace => "whitespace",
            Self::Let => "'let'",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Retrieval => "'?'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Equals => "'='",
            Self::Semicolon => "';'",
        };
        write!(f, "{kind}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug, Default, Clone)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with the location where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token:    Token,
    pub location: Location,
}

/// Pull-based lexer over a complete source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token and advances the
/// cursor past it; nothing is ever scanned twice. Once the source is exhausted
/// every further call yields [`Token::EndOfInput`].
#[derive(Clone)]
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Scans the next token.
    ///
    /// # Errors
    /// Returns [`LexError::UnexpectedCharacter`] if the text at the cursor does
    /// not start any token.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x");
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("x".to_string()));
    /// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> LexResult<Spanned> {
        let line = self.inner.extras.line;

        match self.inner.next() {
            Some(Ok(token)) => Ok(Spanned { token,
                                            location: Location::new(line, self.inner.span().start) }),
            Some(Err(())) => {
                let location = Location::new(line, self.inner.span().start);
                let character = self.inner.slice().chars().next().unwrap_or('\u{FFFD}');
                Err(LexError::UnexpectedCharacter { character, location })
            },
            None => Ok(Spanned { token:    Token::EndOfInput,
                                 location: Location::new(line, self.inner.source().len()), }),
        }
    }

    /// Returns the next non-whitespace token without consuming it.
    ///
    /// The scan runs on a copy of the cursor, so the lexer itself is left
    /// exactly where it was.
    ///
    /// # Errors
    /// Propagates any [`LexError`] hit while scanning ahead.
    pub fn peek(&self) -> LexResult<Spanned> {
        let mut lookahead = self.clone();
        loop {
            let next = lookahead.next_token()?;
            if next.token != Token::Whitespace {
                return Ok(next);
            }
        }
    }

    /// Byte offset of the scan cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.span().end
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
