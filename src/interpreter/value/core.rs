use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64},
};

/// Represents a runtime value in the evaluator.
///
/// Integers stay exact for as long as integer arithmetic can represent the
/// result; everything else is a real number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A integer value (64 bit integer).
    Integer(i64),
}

impl Default for Value {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` are rounded to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => i64_to_f64(*n),
        }
    }

    /// Converts the value to `i64`, or returns an error if it is not integral.
    ///
    /// Reals are accepted when they have no fractional part and fit an `i64`.
    ///
    /// # Parameters
    /// - `position`: Offset of the operand for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::ExpectedInteger)`: If the value is fractional, not
    ///   finite, or out of range.
    pub fn as_integer(&self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_checked(*r).ok_or(RuntimeError::ExpectedInteger { position }),
        }
    }

    /// Returns the integer form of a real value that is mathematically
    /// integral and fits an `i64`; every other value is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(4.0).normalized(), Value::Integer(4));
    /// assert_eq!(Value::Real(-0.0).normalized(), Value::Integer(0));
    /// assert_eq!(Value::Real(0.5).normalized(), Value::Real(0.5));
    /// assert_eq!(Value::Real(1e300).normalized(), Value::Real(1e300));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Real(r) => f64_to_i64_checked(r).map_or(self, Self::Integer),
            Self::Integer(_) => self,
        }
    }

    /// Rejects a real value that is infinite or `NaN`.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` for a non-finite real.
    pub const fn finite(self, position: usize) -> EvalResult<Self> {
        match self {
            Self::Real(r) if !r.is_finite() => Err(RuntimeError::Overflow { position }),
            _ => Ok(self),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Error returned when text cannot be read as a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    text: String,
}

impl std::fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a finite number.", self.text)
    }
}

impl std::error::Error for ParseValueError {}

impl std::str::FromStr for Value {
    type Err = ParseValueError;

    /// Reads an integer if the text is one, otherwise a finite real.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::interpreter::value::core::Value;
    ///
    /// assert_eq!("42".parse(), Ok(Value::Integer(42)));
    /// assert_eq!("-2.5".parse(), Ok(Value::Real(-2.5)));
    /// assert!("inf".parse::<Value>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        match text.parse::<f64>() {
            Ok(r) if r.is_finite() => Ok(Self::Real(r)),
            _ => Err(ParseValueError { text: text.to_string() }),
        }
    }
}
