/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or the caller-supplied error otherwise.
pub mod num;

/// Display formatting for results.
pub mod format;
