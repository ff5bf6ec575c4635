#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the character offset in the preprocessed formula at
/// which the problem was detected.
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending text.
        text:     String,
        /// Offset of the first offending character.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
    /// Reached the end of input where an operand was expected.
    UnexpectedEndOfInput {
        /// Offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Offset of the matching opening parenthesis.
        position: usize,
    },
    /// A bare name that is neither the last answer nor a constant.
    UnknownIdentifier {
        /// The name as written.
        name:     String,
        /// Offset of the name.
        position: usize,
    },
    /// A call with more than two arguments.
    TooManyArguments {
        /// The called name.
        name:     String,
        /// Offset of the called name.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Offset of the first extra token.
        position: usize,
    },
    /// Parentheses, calls or unary minus nested beyond the parser's limit.
    NestingTooDeep {
        /// Offset of the token that exceeded the limit.
        position: usize,
    },
    /// More binary operators than the parser accepts in one formula.
    TooManyOperators {
        /// Offset of the first operator over the limit.
        position: usize,
    },
    /// A numeric literal too large for a finite `f64`.
    LiteralTooLarge {
        /// Offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnknownIdentifier { position, .. }
            | Self::TooManyArguments { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position }
            | Self::TooManyOperators { position }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, position } => {
                write!(f, "Error at {position}: Unexpected character: {text}.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at {position}: Expected closing parenthesis ')' but none found."),

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at {position}: Unknown identifier '{name}'.")
            },

            Self::TooManyArguments { name, position } => write!(f,
                                                                "Error at {position}: '{name}' takes at most two arguments."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at {position}: Expression is nested too deeply.")
            },

            Self::TooManyOperators { position } => {
                write!(f, "Error at {position}: Formula has too many operators.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
