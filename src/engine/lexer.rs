use logos::Logos;
use tracing::trace;

use crate::{
    error::{EvalError, EvalResult},
    operator::BinaryOperator,
    util::num::finite_or_overflow,
};

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens only live for the duration of one evaluation; the evaluator pairs
/// each of them with its byte offset in the source for error reporting.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `1.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the binary operator this token stands for, if any.
    ///
    /// # Example
    /// ```
    /// use kalkulator::{engine::lexer::Token, operator::BinaryOperator};
    ///
    /// assert_eq!(Token::Slash.as_operator(), Some(BinaryOperator::Div));
    /// assert_eq!(Token::LParen.as_operator(), None);
    /// ```
    #[must_use]
    pub const fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    /// Returns `true` if a `-` following this token is a sign rather than a
    /// subtraction.
    const fn starts_operand(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::LParen)
    }
}

/// Deepest parenthesis nesting the evaluator accepts.
pub const MAX_NESTING: usize = 256;

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals beyond the `f64` range parse as
///   infinity and are rejected by [`tokenize`].
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits an expression in evaluator notation into tokens.
///
/// Each token is paired with the byte offset where it starts. A `-` at the
/// start of the input, or right after an operator or `(`, that is directly
/// followed by a number is folded into that number's sign, so `-3` and
/// `2*-3` yield a single negative literal.
///
/// # Parameters
/// - `source`: Expression text using `.` as decimal separator.
///
/// # Returns
/// The token stream with byte offsets.
///
/// # Errors
/// - `MalformedExpression` for characters outside the expression alphabet
///   (letters, whitespace, `,`), for two numbers written back to back
///   (`1.2.3`), and for parentheses nested deeper than [`MAX_NESTING`].
/// - `NumberOverflow` for a literal that does not fit in an `f64`.
///
/// # Example
/// ```
/// use kalkulator::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-2*(1.5-3)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds,
///            vec![Token::Number(-2.0),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Number(1.5),
///                 Token::Minus,
///                 Token::Number(3.0),
///                 Token::RParen]);
///
/// assert!(tokenize("2+x").is_err());
/// assert!(tokenize("1 + 2").is_err());
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<(Token, usize)>> {
    let mut raw = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut depth = 0usize;

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(Token::Number(value)) => {
                finite_or_overflow(value)?;
                if let Some((Token::Number(_), _)) = raw.last() {
                    return Err(EvalError::malformed(format!("unexpected number '{}' at column {}",
                                                            lexer.slice(),
                                                            offset + 1)));
                }
                raw.push((Token::Number(value), offset));
            },
            Ok(Token::LParen) => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(EvalError::malformed(format!("parentheses nested deeper than {MAX_NESTING} levels at column {}",
                                                            offset + 1)));
                }
                raw.push((Token::LParen, offset));
            },
            Ok(Token::RParen) => {
                depth = depth.saturating_sub(1);
                raw.push((Token::RParen, offset));
            },
            Ok(token) => raw.push((token, offset)),
            Err(()) => {
                return Err(EvalError::malformed(format!("unexpected character '{}' at column {}",
                                                        lexer.slice(),
                                                        offset + 1)));
            },
        }
    }

    let tokens = fold_signs(raw);
    trace!(?tokens, "tokenized expression");
    Ok(tokens)
}

/// Folds sign minuses into the number that follows them.
fn fold_signs(raw: Vec<(Token, usize)>) -> Vec<(Token, usize)> {
    let mut tokens: Vec<(Token, usize)> = Vec::with_capacity(raw.len());
    let mut iter = raw.into_iter().peekable();

    while let Some((token, offset)) = iter.next() {
        let is_sign = token == Token::Minus
                      && tokens.last().is_none_or(|(previous, _)| previous.starts_operand());
        if is_sign && let Some(&(Token::Number(value), _)) = iter.peek() {
            iter.next();
            tokens.push((Token::Number(-value), offset));
            continue;
        }
        tokens.push((token, offset));
    }

    tokens
}
