/// Significant digits shown for a non-integral result.
pub const DISPLAY_DIGITS: usize = 10;

/// Formats a result the way a calculator display shows it.
///
/// Integral values are printed without a fractional part. Everything else is
/// printed with [`DISPLAY_DIGITS`] significant digits and trailing zeros
/// removed, switching to scientific notation for exponents below `-4` or at
/// least `DISPLAY_DIGITS`, as C's `%.10g` does.
///
/// ## Example
/// ```
/// use plotcalc::util::format::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(std::f64::consts::PI), "3.141592654");
/// assert_eq!(format_result(1.0 / 3e6), "3.333333333e-07");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", DISPLAY_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..digits_as_exponent()).contains(&exponent) {
        let decimals = usize::try_from(digits_as_exponent() - 1 - exponent).unwrap_or_default();
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn digits_as_exponent() -> i32 {
    DISPLAY_DIGITS as i32
}

/// Drops trailing zeros after a decimal point, and the point itself if
/// nothing is left after it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
