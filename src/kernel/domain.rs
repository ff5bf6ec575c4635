/// Result type returned by every fallible kernel function.
pub type MathResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An operand outside the domain of a kernel function.
pub enum DomainError {
    /// Division (or a root of degree zero) by zero.
    DivisionByZero,
    /// Factorial of a negative number.
    NegativeFactorial,
    /// Factorial of a number with a fractional part.
    FractionalFactorial,
    /// Square root of a negative number.
    NegativeSquareRoot,
    /// Even (or fractional) root of a negative number.
    EvenRootOfNegative,
    /// Logarithm of zero or of a negative number.
    NonPositiveLogarithm,
    /// Logarithm with a base that is not positive or equals one.
    InvalidLogarithmBase,
    /// Tangent of an angle whose cosine is zero.
    UndefinedTangent,
    /// Cotangent of an angle whose sine is zero.
    UndefinedCotangent,
    /// A negative base raised to a fractional exponent.
    ComplexResult,
    /// The result is not a finite `f64`.
    Overflow,
    /// A statistic needs more samples than were supplied.
    InsufficientData,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::NegativeFactorial => write!(f, "Factorial is not defined for negative numbers."),
            Self::FractionalFactorial => {
                write!(f, "Factorial is only defined for whole numbers.")
            },
            Self::NegativeSquareRoot => {
                write!(f, "Square root is not defined for negative numbers.")
            },
            Self::EvenRootOfNegative => {
                write!(f, "Even root is not defined for negative numbers.")
            },
            Self::NonPositiveLogarithm => {
                write!(f, "Logarithm is only defined for positive numbers.")
            },
            Self::InvalidLogarithmBase => {
                write!(f, "Logarithm base must be positive and different from one.")
            },
            Self::UndefinedTangent => write!(f, "Tangent is undefined where cosine is zero."),
            Self::UndefinedCotangent => write!(f, "Cotangent is undefined where sine is zero."),
            Self::ComplexResult => {
                write!(f, "A negative base with a fractional exponent has no real result.")
            },
            Self::Overflow => write!(f, "Result is not a finite number."),
            Self::InsufficientData => write!(f, "Not enough samples."),
        }
    }
}

impl std::error::Error for DomainError {}
