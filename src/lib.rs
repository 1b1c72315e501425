//! # kalkulator
//!
//! kalkulator is the input engine of a desktop calculator. It accumulates
//! key presses into an expression written with comma decimals (`1,5+2,5`),
//! evaluates it with the usual precedence rules, and applies square and square
//! root to the value currently on the display.
//!
//! The presentation layer only forwards [`calculator::Event`]s and renders the
//! returned [`calculator::Snapshot`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// The Input Accumulator and its symbolic events.
///
/// This module owns the calculator session: the expression buffer, the
/// display state machine, and the mapping from keypad labels to events.
///
/// # Responsibilities
/// - Applies one edit operation per key press.
/// - Delegates `=` to the evaluator and the unary keys to the operator
///   module.
/// - Converts failures into the error marker.
pub mod calculator;
/// The Expression Evaluator.
///
/// Tokenizes expression text and evaluates it by recursive descent over two
/// precedence tiers.
///
/// # Responsibilities
/// - Converts text into tokens.
/// - Applies precedence, associativity and parentheses.
/// - Reports malformed input, division by zero and overflow as typed errors.
pub mod engine;
/// Unified error types.
///
/// Defines the failure kinds of the evaluator and the errors raised when
/// parsing keypad labels.
pub mod error;
/// Arithmetic operators.
///
/// The binary operators of the evaluator and the unary operations of the
/// keypad, together with the checked arithmetic behind them.
pub mod operator;
/// Helpers for number notation and range checks.
///
/// # Responsibilities
/// - Converts between comma and dot decimals.
/// - Formats results the way the display shows them.
/// - Turns non-finite values into overflow errors.
pub mod util;

use crate::{
    calculator::{Accumulator, Event, Snapshot},
    error::EventError,
};

/// Replays a key sequence on a fresh accumulator and returns the final
/// display.
///
/// The sequence uses the syntax of [`Event::parse_sequence`].
///
/// # Errors
/// Returns an error if a key label is unknown; no key is pressed in that
/// case.
///
/// # Examples
/// ```
/// use kalkulator::{calculator::DisplayState, press_keys};
///
/// let shown = press_keys("2+3*4 =").unwrap();
/// assert_eq!(shown.text, "14");
/// assert_eq!(shown.state, DisplayState::Result);
///
/// let shown = press_keys("5/0 =").unwrap();
/// assert_eq!(shown.text, "Error!");
/// assert_eq!(shown.state, DisplayState::ErrorShown);
///
/// assert!(press_keys("2 % 3").is_err());
/// ```
pub fn press_keys(keys: &str) -> Result<Snapshot, EventError> {
    let events = Event::parse_sequence(keys)?;
    let mut calculator = Accumulator::new();
    let mut shown = calculator.snapshot();
    for event in events {
        shown = calculator.handle(event);
    }
    Ok(shown)
}
