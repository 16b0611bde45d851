use crate::{
    ast::Function,
    interpreter::evaluator::{core::EvalResult, function::core::arity_mismatch},
};

/// Defines a one-argument builtin that applies the `f64` method of the same
/// name.
///
/// # Example
/// ```
/// use plotcalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0], 1).unwrap();
///
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $function:expr) => {
        pub fn $fname(args: &[f64], position: usize) -> EvalResult<f64> {
            match args {
                [x] => Ok(x.$fname()),
                _ => Err(arity_mismatch($function, args, position)),
            }
        }
    };
}

real_builtin!(sin, Function::Sin);
real_builtin!(cos, Function::Cos);
real_builtin!(tan, Function::Tan);
real_builtin!(abs, Function::Abs);
