/// Conversion between the display notation and the evaluator notation.
///
/// The display writes decimals with a comma (`3,5`), the evaluator reads them
/// with a dot (`3.5`). This module owns that boundary: converting buffer text
/// for evaluation, formatting computed values back for display, and parsing a
/// displayed number for the unary operations.
pub mod locale;
/// Numeric range checks.
///
/// Helpers that turn non-finite floating point values into explicit errors so
/// that overflow never reaches the display as `inf` or `NaN`.
pub mod num;
