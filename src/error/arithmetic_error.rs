use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while computing with exact values.
pub enum ArithmeticError {
    /// Attempted division by zero, or by an interval that contains zero.
    #[error("Division by zero: {operation}.")]
    DivisionByZero {
        /// The operation that was attempted.
        operation: String,
    },
    /// The operation has no defined result for its operands.
    #[error("Undefined operation: {operation}.")]
    UndefinedOperation {
        /// The operation that was attempted.
        operation: String,
    },
}

impl ArithmeticError {
    /// Builds an [`ArithmeticError::DivisionByZero`].
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero { operation: operation.into() }
    }

    /// Builds an [`ArithmeticError::UndefinedOperation`].
    pub fn undefined(operation: impl Into<String>) -> Self {
        Self::UndefinedOperation { operation: operation.into() }
    }
}
