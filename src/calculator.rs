/// The Input Accumulator.
///
/// Owns the expression buffer and the display state, applies edit
/// operations, and hands finished expressions to the evaluator.
///
/// # Responsibilities
/// - Appends digits, operators, parentheses and decimal separators.
/// - Implements backspace, clear entry and clear all.
/// - Runs `=` and the unary operations, replacing the buffer with the
///   formatted result or the error marker.
pub mod accumulator;
/// Symbolic keypad events.
///
/// The presentation layer translates button presses and key strokes into
/// these events. Every event has a textual label matching the button face.
pub mod event;
/// Display states and the outbound snapshot.
pub mod state;

pub use accumulator::{Accumulator, ERROR_MARKER};
pub use event::{Event, KEYPAD_LABELS, Paren};
pub use state::{DisplayState, Snapshot};
