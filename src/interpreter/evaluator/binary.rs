use crate::{
    ast::{BinaryOperator, Location},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a binary operation between two numbers.
    ///
    /// All operators follow IEEE 754 double semantics, except that dividing by
    /// exactly zero (`0.0` or `-0.0`) is an error instead of an infinity or
    /// NaN.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `location`: Location of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Location},
    ///     interpreter::evaluator::Evaluator,
    /// };
    ///
    /// let at = Location::default();
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 8.0, 3.0, at).unwrap(), 5.0);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0, at).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       location: Location)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { location });
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(Self::eval_pow(left, right)),
        }
    }

    /// Evaluates an exponentiation operation.
    ///
    /// Uses the floating-point power function, so negative and fractional
    /// exponents are supported. A negative base with a fractional exponent
    /// yields NaN.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0), 1024.0);
    /// assert_eq!(Evaluator::eval_pow(4.0, 0.5), 2.0);
    /// assert_eq!(Evaluator::eval_pow(2.0, -1.0), 0.5);
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
