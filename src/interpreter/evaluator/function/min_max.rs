use crate::{
    ast::Function,
    interpreter::evaluator::{core::EvalResult, function::core::arity_mismatch},
};

/// Computes the minimum or maximum of two or more values.
///
/// The operation is selected by `function`, which must be
/// [`Function::Min`] or [`Function::Max`].
///
/// # Example
/// ```
/// use plotcalc::{ast::Function, interpreter::evaluator::function::min_max::min_max};
///
/// let r = min_max(Function::Min, &[3.0, 7.0, -1.0], 1).unwrap();
/// assert_eq!(r, -1.0);
///
/// let r = min_max(Function::Max, &[2.5, 1.0], 1).unwrap();
/// assert_eq!(r, 2.5);
/// ```
pub fn min_max(function: Function, args: &[f64], position: usize) -> EvalResult<f64> {
    match args {
        [first, rest @ ..] if !rest.is_empty() => {
            let pick: fn(f64, f64) -> f64 = if function == Function::Min { f64::min } else { f64::max };
            Ok(rest.iter().copied().fold(*first, pick))
        },
        _ => Err(arity_mismatch(function, args, position)),
    }
}
