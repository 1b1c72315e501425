use crate::error::{EvalError, EvalResult};

/// Returns `value` unchanged if it is finite.
///
/// ## Errors
/// Returns `EvalError::NumberOverflow` for infinities and NaN.
///
/// ## Example
/// ```
/// use kalkulator::{error::EvalError, util::num::finite_or_overflow};
///
/// assert_eq!(finite_or_overflow(2.5), Ok(2.5));
/// assert_eq!(finite_or_overflow(f64::INFINITY), Err(EvalError::NumberOverflow));
/// ```
pub const fn finite_or_overflow(value: f64) -> EvalResult<f64> {
    if value.is_finite() { Ok(value) } else { Err(EvalError::NumberOverflow) }
}
