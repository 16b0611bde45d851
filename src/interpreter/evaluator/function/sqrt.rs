use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::arity_mismatch},
};

/// Computes square roots and n-th roots.
///
/// - With one argument: the square root of a non-negative number.
/// - With two arguments: the n-th root `args[0]^(1 / args[1])`. Zero is not
///   permitted as the root.
///
/// Negative radicands are outside the domain in both forms.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[9.0], 1).unwrap(), 3.0);
///
/// // square root written as the 2nd root
/// assert_eq!(sqrt(&[16.0, 2.0], 1).unwrap(), 4.0);
///
/// assert!(sqrt(&[-1.0], 1).is_err());
/// ```
pub fn sqrt(args: &[f64], position: usize) -> EvalResult<f64> {
    match args {
        [x] => Ok(radicand(*x, position)?.sqrt()),
        [x, root] => {
            let x = radicand(*x, position)?;
            if *root == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(x.powf(root.recip()))
        },
        _ => Err(arity_mismatch(Function::Sqrt, args, position)),
    }
}

fn radicand(x: f64, position: usize) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::Domain { function: Function::Sqrt.name(),
                                          details: format!("cannot take the root of negative number {x}"),
                                          position });
    }
    Ok(x)
}
