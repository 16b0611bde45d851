use crate::{
    ast::{Expr, Function},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Environment, EvalResult},
        function::{builtin, min_max, round, sqrt},
    },
};

impl Environment {
    /// Evaluates a function call.
    ///
    /// The function must be bound in this environment. Arguments are
    /// evaluated left to right before the function's rule is applied.
    ///
    /// # Errors
    /// `UnknownFunction` when the function is not available here, otherwise
    /// whatever evaluating an argument or applying the function reports.
    pub(crate) fn eval_call(&self,
                            function: Function,
                            arguments: &[Expr],
                            position: usize)
                            -> EvalResult<f64> {
        if !self.has_function(function) {
            return Err(RuntimeError::UnknownFunction { name: function.name(),
                                                       position });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        apply(function, &values, position)
    }
}

/// Applies a built-in function to already evaluated arguments.
///
/// Each function is an explicit rule; there is no lookup by name at this
/// point.
///
/// # Example
/// ```
/// use plotcalc::{ast::Function, interpreter::evaluator::function::core::apply};
///
/// assert_eq!(apply(Function::Max, &[1.0, 7.0, 3.0], 0).unwrap(), 7.0);
/// assert_eq!(apply(Function::Sqrt, &[9.0], 0).unwrap(), 3.0);
/// ```
pub fn apply(function: Function, args: &[f64], position: usize) -> EvalResult<f64> {
    match function {
        Function::Sin => builtin::sin(args, position),
        Function::Cos => builtin::cos(args, position),
        Function::Tan => builtin::tan(args, position),
        Function::Abs => builtin::abs(args, position),
        Function::Sqrt => sqrt::sqrt(args, position),
        Function::Round => round::round(args, position),
        Function::Min => min_max::min_max(Function::Min, args, position),
        Function::Max => min_max::min_max(Function::Max, args, position),
    }
}

/// The error for a call with an argument count the function rejects.
pub(crate) const fn arity_mismatch(function: Function,
                                   args: &[f64],
                                   position: usize)
                                   -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { function: function.name(),
                                          found: args.len(),
                                          position }
}
