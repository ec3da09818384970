use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::memory::Memory,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks syntax trees and computes their values.
///
/// ## Usage
///
/// An `Evaluator` is one evaluation session. It owns the [`Memory`] that
/// holds every declared variable, so successive programs evaluated by the same
/// instance see each other's declarations. Separate instances share nothing.
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    memory: Memory,
}

impl Evaluator {
    /// Creates a new session with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that starts from an existing variable store.
    #[must_use]
    pub const fn with_memory(memory: Memory) -> Self {
        Self { memory }
    }

    /// The variable store of this session.
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Consumes the session and returns its variable store.
    #[must_use]
    pub fn into_memory(self) -> Memory {
        self.memory
    }

    /// Evaluates every statement of a program in order.
    ///
    /// Evaluation stops at the first error. Statements that completed before
    /// the error keep their effect on the variable store; the failing statement
    /// never changes it.
    ///
    /// # Returns
    /// The value of the last statement. The parser never produces an empty
    /// program; debug builds panic on a hand-built one.
    ///
    /// # Example
    /// ```
    /// use reckon::{interpreter::evaluator::Evaluator, parse};
    ///
    /// let program = parse("let x = 2; x ^ 10").unwrap();
    /// let mut evaluator = Evaluator::new();
    ///
    /// assert_eq!(evaluator.eval_program(&program).unwrap(), 1024.0);
    /// assert!(evaluator.memory().contains("x"));
    /// ```
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<f64> {
        debug!(statements = program.statements.len(), "evaluating program");
        debug_assert!(!program.statements.is_empty(), "a program has at least one statement");

        let mut result = 0.0;
        for statement in &program.statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations and assignments evaluate their value first and only then
    /// touch the store, so a failing right-hand side changes nothing. Both
    /// yield the value that was stored.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Declaration { name,
                                     value,
                                     location, } => {
                let value = self.eval(value)?;
                self.memory.declare(name, value, *location)?;
                Ok(value)
            },
            Statement::Assignment { name,
                                    value,
                                    location, } => {
                let value = self.eval(value)?;
                self.memory.write(name, value, *location)?;
                Ok(value)
            },
        }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Binary operands are evaluated strictly left before right.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Read { name, location } => self.memory.read(name, *location),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { .. } => self.eval_chain(expr),
        }
    }

    /// Evaluates a left-leaning run of binary operations without recursing
    /// down its left side.
    ///
    /// `1 + 2 + 3 + ...` parses into a spine of any length, so the spine is
    /// collected first and then folded from its innermost node outwards.
    fn eval_chain(&mut self, expr: &Expr) -> EvalResult<f64> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let Expr::BinaryOp { left,
                                   op,
                                   right,
                                   location, } = leftmost
        {
            spine.push((*op, right.as_ref(), *location));
            leftmost = left.as_ref();
        }

        let mut value = self.eval(leftmost)?;
        for (op, right, location) in spine.into_iter().rev() {
            let right = self.eval(right)?;
            value = Self::eval_binary(op, value, right, location)?;
        }
        Ok(value)
    }
}
