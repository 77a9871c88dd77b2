use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reading an expression or a
/// numeral.
pub enum ParseError {
    /// A numeral or the expression as a whole is malformed.
    #[error("Format error: {message}")]
    Format {
        /// Details about what is malformed.
        message: String,
    },
    /// A character is not part of the active base's alphabet.
    #[error("Invalid digit '{digit}' for base {base}.")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix that rejected it.
        base:  u32,
    },
    /// A radix value is outside `2..=62`.
    #[error("Range error: {message}")]
    Range {
        /// Details about the rejected value.
        message: String,
    },
    /// The expression grammar was violated.
    #[error("Syntax error at position {position}: {message}")]
    Syntax {
        /// Details about the violation.
        message:  String,
        /// Byte offset into the expression where the problem was detected.
        position: usize,
    },
}

impl ParseError {
    /// Builds a [`ParseError::Format`] from anything printable.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format { message: message.into() }
    }

    /// Builds a [`ParseError::Syntax`] at the given byte offset.
    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax { message: message.into(),
                       position }
    }
}
