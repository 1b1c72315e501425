use tracing::trace;

use crate::{
    engine::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
    error::{EvalError, EvalResult},
};

/// Evaluates an arithmetic expression written in evaluator notation.
///
/// This is the entry point of the evaluator. The text is tokenized, then
/// parsed and folded starting at the lowest precedence tier. Every token must
/// be consumed; anything left over after the top-level expression is an
/// error. The function is pure and keeps no state between calls.
///
/// Grammar:
/// ```text
/// expression := additive
/// additive   := multiplicative (("+" | "-") multiplicative)*
/// multiplicative := primary (("*" | "/") primary)*
/// primary    := number | "(" additive ")" | "-" primary
/// ```
///
/// # Parameters
/// - `source`: Expression text using `.` as decimal separator.
///
/// # Returns
/// The finite value of the expression.
///
/// # Errors
/// - `MalformedExpression` for bad characters, missing operands, unbalanced
///   or empty parentheses and trailing tokens.
/// - `DivisionByZero` when a divisor is exactly zero.
/// - `NumberOverflow` when a literal or any intermediate result is not finite.
///
/// # Example
/// ```
/// use kalkulator::{engine::evaluate, error::EvalError};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
/// assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(evaluate("3+4)"), Err(EvalError::MalformedExpression { .. })));
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let value = parse_additive(&mut iter)?;

    if let Some((token, offset)) = iter.next() {
        return Err(EvalError::malformed(format!("unexpected {} at column {} after the end of the expression",
                                                describe(token),
                                                offset + 1)));
    }

    trace!(source, value, "evaluated expression");
    Ok(value)
}

/// Describes a token for error messages.
pub(in crate::engine::parser) fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number {value}"),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
    }
}
