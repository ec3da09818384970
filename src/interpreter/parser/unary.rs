use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Tokens that can start an atom.
const ATOM_START: [TokenKind; 4] =
    [TokenKind::Number, TokenKind::Identifier, TokenKind::Retrieval, TokenKind::LParen];

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports a single prefix `+` (identity) or `-` (negation). The operand
    /// is a `power`, so the prefix binds looser than `^`: `-2 ^ 2` parses as
    /// `-(2 ^ 2)`. Prefixes do not repeat; `--2` is a syntax error.
    ///
    /// Grammar: `unary := ("+" | "-")? power`
    ///
    /// # Returns
    /// An [`Expr::UnaryOp`] or the bare power expression.
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.current.token {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => return self.parse_power(),
        };

        let location = self.eat(&[TokenKind::Plus, TokenKind::Minus])?.location;
        self.enter()?;
        let expr = self.parse_power()?;
        self.leave();

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           location })
    }

    /// Parses an atomic expression.
    ///
    /// Atoms are numbers, variable reads (`x` or `?x`) and parenthesized
    /// formulas. A grouping yields the inner expression as-is, without a
    /// wrapper node.
    ///
    /// Grammar: `atom := NUMBER | IDENTIFIER | "?" IDENTIFIER | "(" formula ")"`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the current token cannot start an atom,
    /// - the closing `)` is missing,
    /// - the parentheses nest too deeply.
    pub fn parse_atom(&mut self) -> ParseResult<Expr> {
        let Spanned { token, location } = self.eat(&ATOM_START)?;

        match token {
            Token::Number(value) => Ok(Expr::Number { value, location }),
            Token::Identifier(name) | Token::Retrieval(name) => Ok(Expr::Read { name, location }),
            _ => {
                self.enter()?;
                let expr = self.parse_formula()?;
                self.leave();
                self.eat(&[TokenKind::RParen])?;
                Ok(expr)
            },
        }
    }
}
