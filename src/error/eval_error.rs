use thiserror::Error;

/// Result type used by the evaluator and the unary operations.
///
/// Every evaluation step returns either a value of type `T` or an
/// [`EvalError`] describing why the computation was abandoned.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating calculator input.
///
/// The calculator shows the same error marker for every variant; the
/// distinction exists for diagnostics and tests.
pub enum EvalError {
    /// The input is not a well formed expression or number.
    ///
    /// Covers unknown characters, unbalanced parentheses, operators without
    /// operands, empty parentheses and tokens left over after parsing.
    #[error("Malformed expression: {details}.")]
    MalformedExpression {
        /// What exactly was wrong with the input.
        details: String,
    },
    /// The right operand of a division evaluated to exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operation was applied outside of its domain.
    #[error("Domain error: {details}.")]
    DomainError {
        /// The operation and the offending operand.
        details: String,
    },
    /// A literal or an intermediate result exceeded the range of `f64`.
    #[error("Number overflow: the result is too large to represent.")]
    NumberOverflow,
}

impl EvalError {
    /// Shorthand for a [`EvalError::MalformedExpression`] with the given
    /// details.
    ///
    /// # Example
    /// ```
    /// use kalkulator::error::EvalError;
    ///
    /// let err = EvalError::malformed("unexpected end of input");
    /// assert_eq!(err.to_string(), "Malformed expression: unexpected end of input.");
    /// ```
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedExpression { details: details.into() }
    }
}
