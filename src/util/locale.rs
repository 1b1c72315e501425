use crate::{
    error::{EvalError, EvalResult},
    util::num::finite_or_overflow,
};

/// Decimal separator used in the buffer and on the display.
pub const DECIMAL_SEPARATOR: char = ',';
/// Decimal separator understood by the evaluator.
pub const EVAL_DECIMAL_POINT: char = '.';
/// Number of significant digits kept when a value is displayed.
pub const SIGNIFICANT_DIGITS: usize = 15;
/// Smallest decimal exponent still written without scientific notation.
const MIN_POSITIONAL_EXPONENT: i32 = -5;
/// Largest decimal exponent still written without scientific notation.
const MAX_POSITIONAL_EXPONENT: i32 = 14;
/// Exponents beyond this are not expanded; no finite `f64` needs more.
const MAX_EXPANDED_EXPONENT: i32 = 400;

/// Rewrites display text into evaluator notation.
///
/// `,` becomes `.`, and numbers in the scientific form produced by
/// [`format_number`] (`1E+20`, `1,5E-07`) are written out positionally, so a
/// shown result can be continued with an operator. The evaluator itself only
/// reads plain decimals.
///
/// # Errors
/// - `MalformedExpression` if the text contains `.`, which is not a decimal
///   separator on the display.
///
/// # Example
/// ```
/// use kalkulator::util::locale::to_eval_notation;
///
/// assert_eq!(to_eval_notation("1,5+2,5").as_deref(), Ok("1.5+2.5"));
/// assert_eq!(to_eval_notation("1E+20*2").as_deref(), Ok("100000000000000000000*2"));
/// assert_eq!(to_eval_notation("-1,5E-07").as_deref(), Ok("-0.00000015"));
/// assert!(to_eval_notation("3.5").is_err());
/// ```
pub fn to_eval_notation(text: &str) -> EvalResult<String> {
    if let Some(column) = text.find(EVAL_DECIMAL_POINT) {
        return Err(EvalError::malformed(format!("unexpected '{EVAL_DECIMAL_POINT}' at column {}, decimals are written with '{DECIMAL_SEPARATOR}'",
                                                column + 1)));
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(marker) = rest.find('E') {
        let (before, after) = rest.split_at(marker);
        let mantissa_len = before.chars()
                                 .rev()
                                 .take_while(|&c| c.is_ascii_digit() || c == DECIMAL_SEPARATOR)
                                 .count();
        let (head, mantissa) = before.split_at(before.len() - mantissa_len);
        let exponent_text = &after[1..];
        let sign_len = usize::from(exponent_text.starts_with(['+', '-']));
        let exponent_len = sign_len
                           + exponent_text[sign_len..].chars()
                                                      .take_while(char::is_ascii_digit)
                                                      .count();

        push_eval_notation(&mut out, head);
        let expanded = exponent_text[..exponent_len].parse::<i32>()
                                                     .ok()
                                                     .filter(|exponent| exponent.abs() <= MAX_EXPANDED_EXPONENT)
                                                     .filter(|_| mantissa.chars().any(|c| c.is_ascii_digit()))
                                                     .and_then(|exponent| expand_exponent(mantissa, exponent));
        if let Some(expanded) = expanded {
            out.push_str(&expanded);
            rest = &exponent_text[exponent_len..];
        } else {
            // Left for the evaluator to reject.
            push_eval_notation(&mut out, mantissa);
            out.push('E');
            rest = exponent_text;
        }
    }
    push_eval_notation(&mut out, rest);
    Ok(out)
}

fn push_eval_notation(out: &mut String, text: &str) {
    out.extend(text.chars()
                   .map(|c| if c == DECIMAL_SEPARATOR { EVAL_DECIMAL_POINT } else { c }));
}

/// Writes `mantissa * 10^exponent` as a plain decimal with `.`.
fn expand_exponent(mantissa: &str, exponent: i32) -> Option<String> {
    let (integer, fraction) = mantissa.split_once(DECIMAL_SEPARATOR).unwrap_or((mantissa, ""));
    let digits = format!("{integer}{fraction}");
    let shift = usize::try_from(exponent.unsigned_abs()).ok()?;

    let mut out = String::with_capacity(digits.len() + shift + 2);
    if exponent >= 0 {
        let point = integer.len() + shift;
        if point >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', point - digits.len()));
        } else {
            let (whole, part) = digits.split_at(point);
            out.push_str(whole);
            out.push(EVAL_DECIMAL_POINT);
            out.push_str(part);
        }
    } else if shift < integer.len() {
        let (whole, part) = digits.split_at(integer.len() - shift);
        out.push_str(whole);
        out.push(EVAL_DECIMAL_POINT);
        out.push_str(part);
    } else {
        out.push('0');
        out.push(EVAL_DECIMAL_POINT);
        out.extend(std::iter::repeat_n('0', shift - integer.len()));
        out.push_str(&digits);
    }
    Some(out)
}

/// Formats a computed value for the display.
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] significant digits and
/// trailing zeros are dropped, so binary rounding noise such as
/// `0.30000000000000004` is shown as `0,3`. Decimal exponents from `-5` up to
/// `14` are written positionally; anything else uses scientific notation with
/// a signed, at least two digit exponent (`1E+20`, `1,5E-07`).
///
/// # Parameters
/// - `value`: A finite value. Non-finite values never leave the evaluator and
///   are rendered with Rust's default formatting.
///
/// # Returns
/// The display text, using `,` as decimal separator.
///
/// # Example
/// ```
/// use kalkulator::util::locale::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(3.5), "3,5");
/// assert_eq!(format_number(0.1 + 0.2), "0,3");
/// assert_eq!(format_number(-0.000_01), "-0,00001");
/// assert_eq!(format_number(1e20), "1E+20");
/// assert_eq!(format_number(1.5e-7), "1,5E-07");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    if (MIN_POSITIONAL_EXPONENT..=MAX_POSITIONAL_EXPONENT).contains(&exponent) {
        push_positional(&mut out, digits, exponent);
    } else {
        push_scientific(&mut out, digits, exponent);
    }
    out
}

fn push_positional(out: &mut String, digits: &str, exponent: i32) {
    let Ok(magnitude) = usize::try_from(exponent.unsigned_abs()) else {
        return;
    };
    if exponent < 0 {
        out.push('0');
        out.push(DECIMAL_SEPARATOR);
        out.extend(std::iter::repeat_n('0', magnitude - 1));
        out.push_str(digits);
        return;
    }

    let integer_len = magnitude + 1;
    if digits.len() <= integer_len {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', integer_len - digits.len()));
    } else {
        let (integer, fraction) = digits.split_at(integer_len);
        out.push_str(integer);
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
}

fn push_scientific(out: &mut String, digits: &str, exponent: i32) {
    let (lead, rest) = digits.split_at(1);
    out.push_str(lead);
    if !rest.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(rest);
    }
    out.push('E');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exponent.unsigned_abs()));
}

/// Parses display text as a single number.
///
/// Accepts an optional sign, `,` as decimal separator and an optional
/// exponent such as `E+20`, which is everything [`format_number`] produces.
/// Expressions, `.` decimals and empty text are rejected.
///
/// # Errors
/// - `MalformedExpression` if the text is not one number.
/// - `NumberOverflow` if the number does not fit in an `f64`.
///
/// # Example
/// ```
/// use kalkulator::util::locale::parse_number;
///
/// assert_eq!(parse_number("3,5"), Ok(3.5));
/// assert_eq!(parse_number("-4"), Ok(-4.0));
/// assert_eq!(parse_number("1E+20"), Ok(1e20));
/// assert!(parse_number("1+2").is_err());
/// assert!(parse_number("3.5").is_err());
/// assert!(parse_number("").is_err());
/// ```
pub fn parse_number(text: &str) -> EvalResult<f64> {
    let trimmed = text.trim();
    let well_formed = trimmed.chars().any(|c| c.is_ascii_digit())
                      && trimmed.chars()
                                .all(|c| c.is_ascii_digit() || matches!(c, ',' | '+' | '-' | 'e' | 'E'));
    if !well_formed {
        return Err(EvalError::malformed(format!("'{trimmed}' is not a number")));
    }

    let mut literal = String::with_capacity(trimmed.len());
    push_eval_notation(&mut literal, trimmed);
    let value: f64 = literal.parse()
                            .map_err(|_| EvalError::malformed(format!("'{trimmed}' is not a number")))?;
    finite_or_overflow(value)
}
