/// Rendering of evaluated values as text.
///
/// Integers are written in the active base, reals always in decimal with at
/// most ten fractional digits, and a top-level division in a non-decimal base
/// as a quotient and remainder.
pub mod format;
/// Rewriting of a raw formula before it is tokenized.
///
/// Converts literals of the active base to decimal, turns decimal commas into
/// points while keeping argument-separating commas, and closes parentheses the
/// user left open.
pub mod preprocess;

/// The numeral base a formula is written and displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    #[default]
    Decimal,
}

impl Base {
    /// The radix of this base.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::base::Base;
    ///
    /// assert_eq!(Base::Binary.radix(), 2);
    /// assert_eq!(Base::Octal.radix(), 8);
    /// assert_eq!(Base::Decimal.radix(), 10);
    /// ```
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
        }
    }
}

/// A radix that is not one of 2, 8 or 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedBase {
    radix: String,
}

impl std::fmt::Display for UnsupportedBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported base '{}'. Expected 2, 8 or 10.", self.radix)
    }
}

impl std::error::Error for UnsupportedBase {}

impl TryFrom<u32> for Base {
    type Error = UnsupportedBase;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            _ => Err(UnsupportedBase { radix: radix.to_string() }),
        }
    }
}

impl std::str::FromStr for Base {
    type Err = UnsupportedBase;

    /// Reads a radix written in decimal.
    ///
    /// # Example
    /// ```
    /// use kalkulacka::base::Base;
    ///
    /// assert_eq!("8".parse(), Ok(Base::Octal));
    /// assert!("16".parse::<Base>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
         .parse::<u32>()
         .map_err(|_| UnsupportedBase { radix: s.to_string() })
         .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.radix())
    }
}
