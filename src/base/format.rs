use crate::{
    base::Base,
    interpreter::value::core::Value,
    kernel::{ROUND_DIGITS, arith::round_to},
};

/// Text placed between the quotient and the remainder of a division rendered
/// in a non-decimal base.
pub const REMAINDER_SEPARATOR: &str = " zv.";

/// Renders a value for display.
///
/// Integers are written in `base`; reals are always written in decimal.
///
/// # Example
/// ```
/// use kalkulacka::{
///     base::{Base, format::render_value},
///     interpreter::value::core::Value,
/// };
///
/// assert_eq!(render_value(Value::Integer(5), Base::Binary), "101");
/// assert_eq!(render_value(Value::Real(0.5), Base::Binary), "0.5");
/// ```
#[must_use]
pub fn render_value(value: Value, base: Base) -> String {
    match value {
        Value::Integer(n) => render_integer(n, base),
        Value::Real(r) => render_real(r),
    }
}

/// Writes an integer in `base`, with a leading `-` for negative values.
///
/// # Example
/// ```
/// use kalkulacka::base::{Base, format::render_integer};
///
/// assert_eq!(render_integer(10, Base::Octal), "12");
/// assert_eq!(render_integer(-5, Base::Binary), "-101");
/// assert_eq!(render_integer(i64::MIN, Base::Decimal), "-9223372036854775808");
/// ```
#[must_use]
pub fn render_integer(value: i64, base: Base) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    match base {
        Base::Binary => format!("{sign}{magnitude:b}"),
        Base::Octal => format!("{sign}{magnitude:o}"),
        Base::Decimal => format!("{sign}{magnitude}"),
    }
}

/// Writes a real number in decimal.
///
/// The value is rounded to ten fractional digits, trailing zeros and a
/// trailing point are removed, and `.0` is appended when no fractional digit
/// remains. Negative zero is written as `0.0`.
///
/// # Example
/// ```
/// use kalkulacka::base::format::render_real;
///
/// assert_eq!(render_real(2.5), "2.5");
/// assert_eq!(render_real(0.1 + 0.2), "0.3");
/// assert_eq!(render_real(1.0 / 3.0), "0.3333333333");
/// assert_eq!(render_real(-0.000_000_000_01), "0.0");
/// assert_eq!(render_real(4.0), "4.0");
/// ```
#[must_use]
pub fn render_real(value: f64) -> String {
    let rounded = round_to(value, ROUND_DIGITS);
    let text = format!("{rounded:.prec$}", prec = ROUND_DIGITS.unsigned_abs() as usize);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        return "0.0".to_string();
    }
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.0")
    }
}

/// Writes the result of a division as quotient and remainder in `base`.
///
/// # Example
/// ```
/// use kalkulacka::base::{Base, format::render_remainder};
///
/// assert_eq!(render_remainder(1, 2, Base::Binary), "1 zv.10");
/// assert_eq!(render_remainder(-4, 1, Base::Octal), "-4 zv.1");
/// ```
#[must_use]
pub fn render_remainder(quotient: i64, remainder: i64, base: Base) -> String {
    format!("{}{REMAINDER_SEPARATOR}{}",
            render_integer(quotient, base),
            render_integer(remainder, base))
}
