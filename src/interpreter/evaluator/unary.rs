use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// `Plus` is the identity and `Negate` flips the sign.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::UnaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
        }
    }
}
