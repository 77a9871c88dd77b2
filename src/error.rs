/// Numeral and grammar errors.
///
/// Defines all error types that can occur while reading an expression: bad
/// numeral syntax, digits outside the active alphabet, radix values out of
/// range, and unconsumed or missing tokens.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains the errors raised by exact operations on values: division by zero
/// (including interval divisors that span zero) and operations that have no
/// defined result such as `0^0` or the factorial of a negative number.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use parse_error::ParseError;

/// Coarse error category, one per failure class a caller may want to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed numeral syntax or an empty expression.
    Format,
    /// A character outside the active base's alphabet.
    InvalidDigit,
    /// A radix outside `2..=62`.
    Range,
    /// A zero denominator or an interval divisor containing zero.
    DivisionByZero,
    /// `0^0`, factorial of a negative or non-integer value, nested intervals.
    UndefinedOperation,
    /// Unconsumed input, a missing parenthesis, or an unexpected end.
    Syntax,
}

/// The crate-level error returned by [`crate::parse`] and every fallible
/// numeric operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Reading the expression failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluating an operation failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use exacta::{ParseOptions, error::ErrorKind, parse};
    ///
    /// let err = parse("1/0", &ParseOptions::default()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::Format { .. }) => ErrorKind::Format,
            Self::Parse(ParseError::InvalidDigit { .. }) => ErrorKind::InvalidDigit,
            Self::Parse(ParseError::Range { .. }) => ErrorKind::Range,
            Self::Parse(ParseError::Syntax { .. }) => ErrorKind::Syntax,
            Self::Arithmetic(ArithmeticError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Arithmetic(ArithmeticError::UndefinedOperation { .. }) => {
                ErrorKind::UndefinedOperation
            },
        }
    }
}
