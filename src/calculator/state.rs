use std::fmt;

/// What the display currently shows.
///
/// ```text
/// Empty --digit/operator/paren/separator--> Entering
/// Entering --equals/unary ok--> Result
/// Entering --equals/unary failed--> ErrorShown
/// Result|ErrorShown --further input--> Entering
/// any --clear--> Empty
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Nothing has been typed; the display is blank.
    #[default]
    Empty,
    /// The buffer reflects live user input.
    Entering,
    /// The buffer holds a formatted computed value.
    Result,
    /// The display shows the error marker; the buffer is empty.
    ErrorShown,
}

impl DisplayState {
    /// Returns `true` once a calculation has finished, successfully or not.
    ///
    /// Input arriving in one of these states does not edit the shown text in
    /// place; it starts a new expression.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Result | Self::ErrorShown)
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Entering => "entering",
            Self::Result => "result",
            Self::ErrorShown => "error",
        };
        f.write_str(name)
    }
}

/// What the presentation layer renders after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Text for the display field, shown verbatim.
    pub text:  String,
    /// State of the display, e.g. to style errors differently.
    pub state: DisplayState,
}
