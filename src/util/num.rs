/// `-2^63`, the smallest `i64`, which is also exactly representable as an
/// `f64`. Its negation is the first `f64` past `i64::MAX`.
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose their lowest bits; this is the
/// conversion used whenever an integer operand meets a real one.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns `true` if `value` is finite and has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Converts an `f64` to `i64` if the value is finite, integral and within the
/// `i64` range.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i64)`: The exact integer.
/// - `None`: For non-finite, fractional, or out-of-range values.
///
/// # Example
/// ```
/// use kalkulacka::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_checked(-0.0), Some(0));
/// assert_eq!(f64_to_i64_checked(1.5), None);
/// assert_eq!(f64_to_i64_checked(1e20), None);
/// assert_eq!(f64_to_i64_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !is_integral(value) || value < I64_LOWER_BOUND || value >= -I64_LOWER_BOUND {
        return None;
    }
    Some(value as i64)
}
