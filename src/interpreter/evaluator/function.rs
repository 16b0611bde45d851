/// Trigonometric and absolute-value functions.
pub mod builtin;
/// Dispatch from a call node to the function's rule.
pub mod core;
/// `min` and `max` over any number of arguments.
pub mod min_max;
/// `round`, to an integer or to a number of decimal places.
pub mod round;
/// The `sqrt` (square root) function implementation.
///
/// Computes square roots and n-th roots of non-negative numbers.
pub mod sqrt;
