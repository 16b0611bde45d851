use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::arity_mismatch},
    util::num::f64_to_i32_checked,
};

/// Rounds half to even, either to an integer or to a number of decimal
/// places.
///
/// - `round(x)` rounds to the nearest integer; ties go to the even neighbour.
/// - `round(x, n)` rounds to `n` decimal places; a negative `n` rounds to
///   tens, hundreds and so on. `n` must be an integer.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::round::round;
///
/// assert_eq!(round(&[2.5], 1).unwrap(), 2.0);
/// assert_eq!(round(&[3.5], 1).unwrap(), 4.0);
/// assert_eq!(round(&[3.14159, 2.0], 1).unwrap(), 3.14);
/// assert_eq!(round(&[1234.0, -2.0], 1).unwrap(), 1200.0);
/// ```
pub fn round(args: &[f64], position: usize) -> EvalResult<f64> {
    match args {
        [x] => Ok(x.round_ties_even()),
        [x, digits] => {
            let digits = f64_to_i32_checked(*digits, RuntimeError::Domain {
                function: Function::Round.name(),
                details: format!("number of digits must be an integer, found {digits}"),
                position,
            })?;
            Ok(round_to_digits(*x, digits))
        },
        _ => Err(arity_mismatch(Function::Round, args, position)),
    }
}

fn round_to_digits(x: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    if factor == 0.0 {
        return 0.0f64.copysign(x);
    }

    let scaled = x * factor;
    if !scaled.is_finite() {
        // More digits than an f64 carries.
        return x;
    }
    scaled.round_ties_even() / factor
}
