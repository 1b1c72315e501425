use std::iter::Peekable;

use crate::{
    engine::{lexer::Token, parser::unary::parse_primary},
    error::EvalResult,
};

/// Parses and folds addition and subtraction.
///
/// Handles the left-associative operators `+` and `-`, so `8-3-2` is
/// `(8-3)-2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
///
/// # Returns
/// The value of the additive expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token.as_operator()
          && !op.is_multiplicative()
    {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = op.apply(left, right)?;
    }
    Ok(left)
}

/// Parses and folds multiplication and division.
///
/// Handles the left-associative operators `*` and `/`, so `16/4/2` is
/// `(16/4)/2`. A divisor of exactly zero stops the evaluation.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
///
/// # Returns
/// The value of the multiplicative expression.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token.as_operator()
          && op.is_multiplicative()
    {
        tokens.next();
        let right = parse_primary(tokens)?;
        left = op.apply(left, right)?;
    }
    Ok(left)
}
