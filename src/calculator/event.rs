use std::{fmt, str::FromStr};

use crate::{
    error::EventError,
    operator::{BinaryOperator, UnaryOperator},
    util::locale::DECIMAL_SEPARATOR,
};

/// Button faces of the calculator keypad, row by row.
pub const KEYPAD_LABELS: [[&str; 4]; 5] = [["x^2", "CE", "C", "sqrt"],
                                           ["7", "8", "9", "/"],
                                           ["4", "5", "6", "*"],
                                           ["1", "2", "3", "-"],
                                           ["0", ",", "=", "+"]];

/// Which side of a parenthesis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Paren {
    /// Returns the bracket character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

/// A symbolic key press forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A digit key, `0` to `9`.
    Digit(u8),
    /// One of `+ - * /`.
    Operator(BinaryOperator),
    /// `(` or `)`.
    Paren(Paren),
    /// The `,` key.
    DecimalSeparator,
    /// The `=` key.
    Equals,
    /// The `x^2` key.
    Square,
    /// The `sqrt` key.
    SquareRoot,
    /// The `CE` key.
    ClearEntry,
    /// The `C` key.
    ClearAll,
    /// The backspace key.
    Backspace,
}

impl Event {
    /// Returns the unary operation behind `Square` and `SquareRoot`.
    #[must_use]
    pub const fn unary_operator(self) -> Option<UnaryOperator> {
        match self {
            Self::Square => Some(UnaryOperator::Square),
            Self::SquareRoot => Some(UnaryOperator::SquareRoot),
            _ => None,
        }
    }

    /// Parses a key sequence.
    ///
    /// Words are separated by whitespace. A word is either one label
    /// (`sqrt`, `CE`, `=`) or a run of single-character labels, so
    /// `1,5+2,5 =` presses seven keys and then `=`.
    ///
    /// # Errors
    /// Returns `EventError::UnknownLabel` naming the first word that is
    /// neither a label nor made of single-character labels.
    ///
    /// # Example
    /// ```
    /// use kalkulator::{
    ///     calculator::{Event, Paren},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let events = Event::parse_sequence("(4 x^2 +1) =").unwrap();
    /// assert_eq!(events,
    ///            vec![Event::Paren(Paren::Open),
    ///                 Event::Digit(4),
    ///                 Event::Square,
    ///                 Event::Operator(BinaryOperator::Add),
    ///                 Event::Digit(1),
    ///                 Event::Paren(Paren::Close),
    ///                 Event::Equals]);
    /// ```
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, EventError> {
        let mut events = Vec::new();
        for word in input.split_whitespace() {
            if let Ok(event) = word.parse() {
                events.push(event);
                continue;
            }
            for key in word.chars() {
                let event = Self::from_char(key).ok_or_else(|| EventError::UnknownLabel { label:
                                                                                              word.to_string() })?;
                events.push(event);
            }
        }
        Ok(events)
    }

    fn from_char(key: char) -> Option<Self> {
        if let Some(digit) = key.to_digit(10) {
            return u8::try_from(digit).ok().map(Self::Digit);
        }
        match key {
            '(' => Some(Self::Paren(Paren::Open)),
            ')' => Some(Self::Paren(Paren::Close)),
            ',' | '.' => Some(Self::DecimalSeparator),
            '=' => Some(Self::Equals),
            '√' => Some(Self::SquareRoot),
            '²' => Some(Self::Square),
            '⌫' => Some(Self::Backspace),
            _ => BinaryOperator::from_symbol(key).map(Self::Operator),
        }
    }
}

impl FromStr for Event {
    type Err = EventError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "" => Err(EventError::Empty),
            "x^2" | "sqr" => Ok(Self::Square),
            "sqrt" => Ok(Self::SquareRoot),
            "CE" => Ok(Self::ClearEntry),
            "C" => Ok(Self::ClearAll),
            "<-" | "back" => Ok(Self::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) => Self::from_char(key),
                    _ => None,
                }.ok_or_else(|| EventError::UnknownLabel { label: label.to_string() })
            },
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Paren(paren) => write!(f, "{}", paren.symbol()),
            Self::DecimalSeparator => write!(f, "{DECIMAL_SEPARATOR}"),
            Self::Equals => f.write_str("="),
            Self::Square => f.write_str("x^2"),
            Self::SquareRoot => f.write_str("sqrt"),
            Self::ClearEntry => f.write_str("CE"),
            Self::ClearAll => f.write_str("C"),
            Self::Backspace => f.write_str("<-"),
        }
    }
}
