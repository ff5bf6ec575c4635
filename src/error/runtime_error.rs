use crate::kernel::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a name that is not in the function namespace.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Offset of the call.
        position: usize,
    },
    /// The call supplied a different number of arguments than the function
    /// takes.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Offset of the call.
        position: usize,
    },
    /// A kernel function rejected its operand.
    Domain {
        /// The kernel's reason.
        source:   DomainError,
        /// Offset of the operator or call.
        position: usize,
    },
    /// An integral value was expected, but the operand has a fractional part.
    ExpectedInteger {
        /// Offset of the operand.
        position: usize,
    },
    /// The result is not a finite number.
    Overflow {
        /// Offset of the operator or call.
        position: usize,
    },
}

impl RuntimeError {
    /// Wraps a kernel error with the offset of the node that raised it.
    ///
    /// The kernel's own overflow is reported as [`RuntimeError::Overflow`], so
    /// callers see a single overflow variant whatever layer detected it.
    #[must_use]
    pub const fn domain(source: DomainError, position: usize) -> Self {
        match source {
            DomainError::Overflow => Self::Overflow { position },
            _ => Self::Domain { source, position },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at {position}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at {position}: '{name}' takes {expected} argument(s), but {found} were given."),
            Self::Domain { source, position } => write!(f, "Error at {position}: {source}"),
            Self::ExpectedInteger { position } => {
                write!(f, "Error at {position}: Expected an integer.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at {position}: Result is too large to be represented."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain { source, .. } => Some(source),
            _ => None,
        }
    }
}
