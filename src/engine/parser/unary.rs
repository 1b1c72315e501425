use std::iter::Peekable;

use crate::{
    engine::{
        lexer::Token,
        parser::{binary::parse_additive, core::describe},
    },
    error::{EvalError, EvalResult},
};

/// Parses a primary operand.
///
/// A primary is a number, a parenthesised additive expression, or a `-`
/// applied to another primary (`-(2+3)`). Signs directly in front of a number
/// were already folded by the lexer. Runs of `-` are counted in a loop, so
/// only parentheses make the descent deeper, and the lexer caps those.
///
/// Grammar: `primary := number | "(" additive ")" | "-" primary`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the operand.
///
/// # Returns
/// The value of the operand.
///
/// # Errors
/// - `MalformedExpression` if the stream ends, if an operator or `)` appears
///   where an operand is expected, or if `(` is never closed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut negate = false;
    while let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        negate = !negate;
    }

    let value = match tokens.next() {
        Some((Token::Number(value), _)) => *value,
        Some((Token::LParen, offset)) => parse_group(tokens, *offset)?,
        Some((token, offset)) => {
            return Err(EvalError::malformed(format!("expected a number or '(' at column {}, found {}",
                                                    offset + 1,
                                                    describe(token))));
        },
        None => return Err(EvalError::malformed("unexpected end of input")),
    };

    Ok(if negate { -value } else { value })
}

/// Parses the inside of a parenthesis pair whose `(` sits at `open`.
fn parse_group<'a, I>(tokens: &mut Peekable<I>, open: usize) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        return Err(EvalError::malformed(format!("empty parentheses at column {}", open + 1)));
    }

    let value = parse_additive(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(value),
        Some((token, offset)) => {
            Err(EvalError::malformed(format!("expected ')' at column {}, found {}",
                                             offset + 1,
                                             describe(token))))
        },
        None => Err(EvalError::malformed(format!("parenthesis opened at column {} is never closed",
                                                 open + 1))),
    }
}
