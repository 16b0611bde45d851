use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Evaluates a binary arithmetic operation on two finite operands.
    ///
    /// Division checks its right operand for exactly zero (either sign).
    /// Exponentiation uses real-number `powf`; zero raised to a negative
    /// power counts as a division by zero, while other impossible powers
    /// (e.g. a negative base with a fractional exponent) yield NaN and are
    /// rejected by the caller's finiteness check.
    ///
    /// # Example
    /// ```
    /// use plotcalc::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap();
    /// assert_eq!(result, 1024.0);
    ///
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left / right
            },
            Pow => {
                if left == 0.0 && right < 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.powf(right)
            },
        })
    }
}
