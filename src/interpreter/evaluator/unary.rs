use crate::{ast::UnaryOperator, interpreter::evaluator::core::Environment};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{ast::UnaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
