use tracing::{debug, trace, warn};

use crate::{
    calculator::{
        event::{Event, Paren},
        state::{DisplayState, Snapshot},
    },
    engine::evaluate,
    error::{EvalError, EvalResult},
    operator::{BinaryOperator, UnaryOperator},
    util::locale::{DECIMAL_SEPARATOR, format_number, parse_number, to_eval_notation},
};

/// Text shown in place of a result when a calculation fails.
pub const ERROR_MARKER: &str = "Error!";

/// Accumulates key presses into an expression and evaluates it.
///
/// The accumulator is the only owner of the expression buffer and the
/// display state. All mutation goes through the edit operations below (or
/// through [`Accumulator::handle`], which dispatches a symbolic event to
/// them). Every operation is synchronous and infallible: failures move the
/// display to [`DisplayState::ErrorShown`] instead of being returned.
///
/// # Example
/// ```
/// use kalkulator::calculator::{Accumulator, DisplayState, Event};
///
/// let mut calc = Accumulator::new();
/// for event in Event::parse_sequence("1,5+2,5").unwrap() {
///     calc.handle(event);
/// }
/// assert_eq!(calc.text(), "1,5+2,5");
///
/// calc.equals();
/// assert_eq!(calc.text(), "4");
/// assert_eq!(calc.state(), DisplayState::Result);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    buffer:       String,
    state:        DisplayState,
    error_marker: String,
    last_error:   Option<EvalError>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an empty accumulator showing [`ERROR_MARKER`] on failures.
    #[must_use]
    pub fn new() -> Self {
        Self::with_error_marker(ERROR_MARKER)
    }

    /// Creates an empty accumulator with a custom error marker.
    ///
    /// # Example
    /// ```
    /// use kalkulator::calculator::Accumulator;
    ///
    /// let mut calc = Accumulator::with_error_marker("Błąd!");
    /// calc.equals_on("5/0");
    /// assert_eq!(calc.text(), "Błąd!");
    /// ```
    #[must_use]
    pub fn with_error_marker(marker: impl Into<String>) -> Self {
        Self { buffer:       String::new(),
               state:        DisplayState::Empty,
               error_marker: marker.into(),
               last_error:   None, }
    }

    /// Returns the text the display should show.
    ///
    /// This is the buffer, except while an error is shown, where it is the
    /// error marker.
    #[must_use]
    pub fn text(&self) -> &str {
        match self.state {
            DisplayState::ErrorShown => &self.error_marker,
            _ => &self.buffer,
        }
    }

    /// Returns the raw expression buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the current display state.
    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns the error marker used by this accumulator.
    #[must_use]
    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Returns why the error marker is shown, while it is shown.
    #[must_use]
    pub const fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Returns the display text and state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { text:  self.text().to_string(),
                   state: self.state, }
    }

    /// Applies one symbolic event and returns what the display shows
    /// afterwards.
    pub fn handle(&mut self, event: Event) -> Snapshot {
        debug!(%event, state = %self.state, "key pressed");
        match event {
            Event::Digit(digit) => self.append_digit(digit),
            Event::Operator(op) => self.append_operator(op),
            Event::Paren(paren) => self.append_paren(paren),
            Event::DecimalSeparator => self.append_decimal_separator(),
            Event::Equals => self.equals(),
            Event::Square => self.apply_unary(UnaryOperator::Square),
            Event::SquareRoot => self.apply_unary(UnaryOperator::SquareRoot),
            Event::ClearEntry => self.clear_entry(),
            Event::ClearAll => self.clear_all(),
            Event::Backspace => self.backspace(),
        }
        self.snapshot()
    }

    /// Appends a digit.
    ///
    /// After a result or an error the digit starts a new expression. Values
    /// above 9 are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        let Some(symbol) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "ignoring digit outside 0..=9");
            return;
        };
        self.start_over_if_final();
        self.push(symbol);
    }

    /// Appends an operator symbol without checking where it lands.
    ///
    /// Misplaced operators are reported when the expression is evaluated.
    /// After a result the operator continues the expression from the shown
    /// value; after an error the buffer is already empty.
    pub fn append_operator(&mut self, op: BinaryOperator) {
        self.push(op.symbol());
    }

    /// Appends a parenthesis. Balance is checked when evaluating.
    pub fn append_paren(&mut self, paren: Paren) {
        self.start_over_if_final();
        self.push(paren.symbol());
    }

    /// Appends `,` unless the number being typed already has one.
    ///
    /// # Example
    /// ```
    /// use kalkulator::calculator::{Accumulator, Event};
    ///
    /// let mut calc = Accumulator::new();
    /// for event in Event::parse_sequence("1,2,").unwrap() {
    ///     calc.handle(event);
    /// }
    /// assert_eq!(calc.text(), "1,2");
    /// ```
    pub fn append_decimal_separator(&mut self) {
        self.start_over_if_final();
        if current_number(&self.buffer).contains(DECIMAL_SEPARATOR) {
            trace!(buffer = %self.buffer, "number already has a decimal separator");
            return;
        }
        self.push(DECIMAL_SEPARATOR);
    }

    /// Deletes the last character.
    ///
    /// A shown result or error is removed as a whole.
    pub fn backspace(&mut self) {
        match self.state {
            DisplayState::Empty => {},
            DisplayState::Result | DisplayState::ErrorShown => self.clear_entry(),
            DisplayState::Entering => {
                self.buffer.pop();
                if self.buffer.is_empty() {
                    self.state = DisplayState::Empty;
                }
            },
        }
    }

    /// Empties the buffer.
    pub fn clear_entry(&mut self) {
        self.buffer.clear();
        self.state = DisplayState::Empty;
        self.last_error = None;
    }

    /// Resets the accumulator. There is no memory beyond the buffer, so
    /// this is the same as [`Accumulator::clear_entry`].
    pub fn clear_all(&mut self) {
        self.clear_entry();
    }

    /// Applies a unary operation to the whole buffer.
    ///
    /// The buffer must hold exactly one number in display notation; it is not
    /// evaluated as an expression.
    ///
    /// # Example
    /// ```
    /// use kalkulator::{
    ///     calculator::{Accumulator, DisplayState, Event},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let mut calc = Accumulator::new();
    /// calc.handle(Event::Digit(4));
    /// calc.apply_unary(UnaryOperator::Square);
    /// assert_eq!(calc.text(), "16");
    ///
    /// calc.apply_unary(UnaryOperator::SquareRoot);
    /// assert_eq!(calc.text(), "4");
    /// assert_eq!(calc.state(), DisplayState::Result);
    /// ```
    pub fn apply_unary(&mut self, op: UnaryOperator) {
        let outcome = parse_number(&self.buffer).and_then(|operand| op.apply(operand));
        self.finish(outcome);
    }

    /// Evaluates the buffer and shows the result.
    ///
    /// Does nothing when there is nothing to evaluate.
    pub fn equals(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let outcome = to_eval_notation(&self.buffer).and_then(|source| evaluate(&source));
        self.finish(outcome);
    }

    /// Replaces the buffer with `expression` and evaluates it.
    ///
    /// Shorthand for typing the expression and pressing `=`. The text is
    /// taken verbatim in display notation: `,` decimals, optionally in the
    /// scientific form results are shown in. A `.` is malformed.
    pub fn equals_on(&mut self, expression: &str) {
        self.buffer = expression.to_string();
        self.state = DisplayState::Entering;
        self.last_error = None;
        self.equals();
    }

    fn finish(&mut self, outcome: EvalResult<f64>) {
        match outcome {
            Ok(value) => {
                self.buffer = format_number(value);
                self.state = DisplayState::Result;
                self.last_error = None;
            },
            Err(error) => {
                debug!(%error, buffer = %self.buffer, "calculation failed");
                self.buffer.clear();
                self.state = DisplayState::ErrorShown;
                self.last_error = Some(error);
            },
        }
    }

    fn start_over_if_final(&mut self) {
        if self.state.is_final() {
            self.buffer.clear();
        }
    }

    fn push(&mut self, symbol: char) {
        self.buffer.push(symbol);
        self.state = DisplayState::Entering;
        self.last_error = None;
    }
}

/// Returns the number currently being typed: the text after the last
/// operator or parenthesis.
fn current_number(buffer: &str) -> &str {
    buffer.rsplit(|c: char| BinaryOperator::from_symbol(c).is_some() || matches!(c, '(' | ')'))
          .next()
          .unwrap_or(buffer)
}
