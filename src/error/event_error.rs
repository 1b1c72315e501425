use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised while turning button labels into calculator events.
pub enum EventError {
    /// The label does not name any key on the keypad.
    #[error("Unknown key '{label}'.")]
    UnknownLabel {
        /// The text that could not be matched.
        label: String,
    },
    /// A label was expected but the input was empty.
    #[error("No key given.")]
    Empty,
}
