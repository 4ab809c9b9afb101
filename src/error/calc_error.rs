/// Result type shared by every stage of the pipeline.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Offsets are character indices into the expression with all whitespace
/// removed.
pub enum CalcError {
    /// A character that is not whitespace, a digit, `.`, a parenthesis or a
    /// registered operator symbol.
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// Where the character was found.
        offset:    usize,
    },
    /// A lexeme that could not be turned into a token, such as `1.2.3`.
    InvalidToken {
        /// The text of the token.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
    /// A structural violation: empty input, empty parentheses, a misplaced
    /// operator and similar.
    InvalidExpression {
        /// Details about what is wrong.
        message: String,
        /// Where the problem was detected, if anywhere in particular.
        offset:  Option<usize>,
    },
    /// Two `~` operators in a row.
    ConsecutiveTildes {
        /// The offset of the second `~`.
        offset: usize,
    },
    /// A parenthesis without a partner.
    MismatchedParentheses {
        /// The offset of the unmatched parenthesis.
        offset: usize,
    },
    /// An operator was applied with fewer operands than its arity.
    MissingOperand {
        /// The symbol of the operator.
        symbol: &'static str,
        /// Where the operator appeared.
        offset: usize,
    },
    /// Division or modulo by exactly zero.
    DivisionByZero {
        /// Where the operator appeared.
        offset: usize,
    },
    /// Factorial of a negative number.
    FactorialNegativeNumber {
        /// The operand that was rejected.
        value:  f64,
        /// Where the operator appeared.
        offset: usize,
    },
    /// Factorial of a number that is not an integer.
    FactorialNonInteger {
        /// The operand that was rejected.
        value:  f64,
        /// Where the operator appeared.
        offset: usize,
    },
    /// A result or argument that is too large to be represented.
    RangeExceeded {
        /// Details about the value that overflowed.
        details: String,
        /// Where the overflow happened, if known.
        offset:  Option<usize>,
    },
}

impl CalcError {
    /// Shorthand for an [`CalcError::InvalidExpression`] anchored at `offset`.
    pub fn invalid_at(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidExpression { message: message.into(),
                                  offset:  Some(offset), }
    }

    /// Shorthand for a [`CalcError::RangeExceeded`] anchored at `offset`.
    pub fn range_at(details: impl Into<String>, offset: usize) -> Self {
        Self::RangeExceeded { details: details.into(),
                              offset:  Some(offset), }
    }

    /// Returns the offset the error is anchored to, if any.
    ///
    /// # Example
    /// ```
    /// use opcalc::CalcError;
    ///
    /// assert_eq!(CalcError::DivisionByZero { offset: 1 }.offset(), Some(1));
    /// assert_eq!(CalcError::InvalidExpression { message: "empty".to_string(),
    ///                                           offset:  None, }.offset(),
    ///            None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::InvalidToken { offset, .. }
            | Self::ConsecutiveTildes { offset }
            | Self::MismatchedParentheses { offset }
            | Self::MissingOperand { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::FactorialNegativeNumber { offset, .. }
            | Self::FactorialNonInteger { offset, .. } => Some(*offset),
            Self::InvalidExpression { offset, .. } | Self::RangeExceeded { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "Invalid character '{character}'.")
            },
            Self::InvalidToken { token, .. } => write!(f, "Invalid token encountered: {token}."),
            Self::InvalidExpression { message, .. } => write!(f, "Invalid expression: {message}."),
            Self::ConsecutiveTildes { .. } => {
                write!(f, "Consecutive '~' operators are not allowed.")
            },
            Self::MismatchedParentheses { .. } => write!(f, "Mismatched parentheses."),
            Self::MissingOperand { symbol, .. } => {
                write!(f, "Missing operand for operator '{symbol}'.")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero is not allowed."),
            Self::FactorialNegativeNumber { value, .. } => {
                write!(f, "Factorial is not defined for negative numbers: {value}.")
            },
            Self::FactorialNonInteger { value, .. } => write!(f,
                                                              "Factorial is only defined for integers, but found {value}."),
            Self::RangeExceeded { details, .. } => write!(f, "Out of range: {details}."),
        }
    }
}

impl std::error::Error for CalcError {}
