use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// This is the entry point for expression parsing. Handles the
    /// left-associative binary operators `+` and `-`, so `8 - 3 - 2` parses as
    /// `(8 - 3) - 2`.
    ///
    /// Grammar: `formula := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub fn parse_formula(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Plus, TokenKind::Minus], Self::parse_term)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles the left-associative operators `*` and `/`.
    ///
    /// Grammar: `term := unary (("*" | "/") unary)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(&[TokenKind::Star, TokenKind::Slash], Self::parse_unary)
    }

    /// Parses exponentiation expressions.
    ///
    /// Exponentiation is right-associative: the right operand recurses into
    /// `power` rather than `atom`, so `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
    ///
    /// Grammar: `power := atom ("^" power)?`
    pub fn parse_power(&mut self) -> ParseResult<Expr> {
        let left = self.parse_atom()?;

        if !self.check(TokenKind::Caret) {
            return Ok(left);
        }

        let location = self.eat(&[TokenKind::Caret])?.location;
        self.enter()?;
        let right = self.parse_power()?;
        self.leave();

        Ok(Expr::BinaryOp { left: Box::new(left),
                            op: BinaryOperator::Pow,
                            right: Box::new(right),
                            location })
    }

    /// Folds a chain of same-precedence operators to the left.
    ///
    /// A chain builds a left spine of any length without adding to the
    /// nesting depth; the evaluator walks that spine iteratively.
    ///
    /// # Parameters
    /// - `operators`: The token kinds accepted at this precedence level.
    /// - `operand`: Parses one operand at the next tighter level.
    fn parse_left_associative(&mut self,
                              operators: &[TokenKind],
                              operand: fn(&mut Self) -> ParseResult<Expr>)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while operators.contains(&self.current.token.kind())
              && let Some(op) = token_to_binary_operator(&self.current.token)
        {
            let location = self.eat(operators)?.location;
            let right = operand(self)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    location };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`) and `None` for all other tokens.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
