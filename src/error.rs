/// Evaluation errors.
///
/// Defines every way an expression or a unary operation can fail: malformed
/// input, division by zero, domain errors such as the square root of a
/// negative number, and results that do not fit in an `f64`.
pub mod eval_error;
/// Button label errors.
///
/// Raised when text handed to the calculator cannot be mapped to one of the
/// symbolic keypad events.
pub mod event_error;

pub use eval_error::{EvalError, EvalResult};
pub use event_error::EventError;
