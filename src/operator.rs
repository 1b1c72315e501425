use crate::{
    error::{EvalError, EvalResult},
    util::num::finite_or_overflow,
};

/// A binary arithmetic operator.
///
/// `Add` and `Sub` form the additive tier, `Mul` and `Div` the
/// multiplicative tier. Operators of the same tier associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// All operators in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the ASCII symbol written into the calculator buffer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps an ASCII symbol back to its operator.
    ///
    /// # Example
    /// ```
    /// use kalkulator::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator to two operands.
    ///
    /// Division by exactly zero is rejected instead of producing an infinity
    /// or NaN, and any result outside the finite `f64` range is reported as
    /// an overflow.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The finite result of `left op right`.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by `0`.
    /// - `NumberOverflow` when the result is not finite.
    ///
    /// # Example
    /// ```
    /// use kalkulator::{error::EvalError, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), Ok(5.0));
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
    /// assert_eq!(BinaryOperator::Mul.apply(1e308, 10.0), Err(EvalError::NumberOverflow));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        let value = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            },
        };
        finite_or_overflow(value)
    }
}

/// An operation applied to the whole value shown on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `x^2`
    Square,
    /// `sqrt`
    SquareRoot,
}

impl UnaryOperator {
    /// Applies the operation to a single operand.
    ///
    /// # Errors
    /// - `DomainError` for the square root of a negative number.
    /// - `NumberOverflow` when squaring leaves the `f64` range.
    ///
    /// # Example
    /// ```
    /// use kalkulator::operator::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Square.apply(4.0), Ok(16.0));
    /// assert_eq!(UnaryOperator::SquareRoot.apply(2.25), Ok(1.5));
    /// assert!(UnaryOperator::SquareRoot.apply(-4.0).is_err());
    /// ```
    pub fn apply(self, operand: f64) -> EvalResult<f64> {
        match self {
            Self::Square => finite_or_overflow(operand * operand),
            Self::SquareRoot if operand < 0.0 => {
                Err(EvalError::DomainError { details: format!("square root of negative number {operand}") })
            },
            Self::SquareRoot => Ok(operand.sqrt()),
        }
    }
}
