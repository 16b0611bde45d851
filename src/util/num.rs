/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use plotcalc::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, "too big!"), Ok(100.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(error),
    }
}

/// Safely converts an `f64` to `i32` if the value is finite, within range,
/// and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use plotcalc::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-3.0, "bad"), Ok(-3));
/// assert_eq!(f64_to_i32_checked(1.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_i32_checked(1e12, "bad"), Err("bad"));
/// assert_eq!(f64_to_i32_checked(f64::NAN, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked<E>(value: f64, error: E) -> Result<i32, E> {
    if !value.is_finite()
       || value.fract() != 0.0
       || value < f64::from(i32::MIN)
       || value > f64::from(i32::MAX)
    {
        return Err(error);
    }
    Ok(value as i32)
}
